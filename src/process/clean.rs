use tracing::debug;

use crate::fetch::cases::CaseTable;
use crate::process::date_parser::parse_date_label;
use crate::process::normalize::{canonical_borough, strip_county_suffix, NYC_COUNTIES, TARGET_STATE};
use crate::process::types::{CleanOutcome, Dropped, Record, CUTOFF_DATE};

/// Reduce the wide county table to the normalized per-borough series.
///
/// Keeps rows for the five NYC counties in state NY, walks each row's date
/// columns in order, and emits one [`Record`] per usable (label, value)
/// pair. Pairs before the cutoff, with unparseable labels, or with missing
/// values are excluded and reported in `dropped` rather than surfaced as
/// errors. Output order is row-then-column.
pub fn clean(table: &CaseTable) -> CleanOutcome {
    let mut out = CleanOutcome::default();

    for row in &table.rows {
        let county = strip_county_suffix(&row.county_name);
        if !NYC_COUNTIES.contains(&county) {
            out.dropped.push(Dropped::UnrecognizedCounty(row.county_name.clone()));
            continue;
        }
        if row.state != TARGET_STATE {
            out.dropped.push(Dropped::OutOfState {
                county: county.to_string(),
                state: row.state.clone(),
            });
            continue;
        }
        let borough = canonical_borough(county);

        for (label, value) in table.date_labels.iter().zip(&row.values) {
            let date = match parse_date_label(label) {
                Some(d) => d,
                None => {
                    out.dropped.push(Dropped::UnparseableLabel(label.clone()));
                    continue;
                }
            };
            if date < CUTOFF_DATE {
                out.dropped.push(Dropped::BeforeCutoff { label: label.clone() });
                continue;
            }
            let cases = match value {
                Some(v) => *v,
                None => {
                    out.dropped.push(Dropped::MissingValue {
                        borough: borough.to_string(),
                        label: label.clone(),
                    });
                    continue;
                }
            };
            out.records.push(Record {
                date,
                cases,
                borough: borough.to_string(),
            });
        }
    }

    debug!(
        records = out.records.len(),
        dropped = out.dropped.len(),
        "cleaned case table"
    );
    out
}
