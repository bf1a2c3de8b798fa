use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

/// Number of leading identifying columns before the date columns start:
/// county FIPS, county name, state, state FIPS.
const META_COLUMNS: usize = 4;

/// The wide case-count file, parsed and shape-checked once at ingestion.
///
/// `date_labels` holds the raw header text of every date column; each row's
/// `values` vector is aligned with it index-for-index. Labels are kept as
/// text here so the cleaner owns all date interpretation.
#[derive(Debug, Clone)]
pub struct CaseTable {
    pub date_labels: Vec<String>,
    pub rows: Vec<RawCountyRow>,
}

/// One source row with the four metadata columns given names instead of
/// being re-read out of an untyped map downstream.
#[derive(Debug, Clone)]
pub struct RawCountyRow {
    pub county_fips: String,
    pub county_name: String,
    pub state: String,
    pub state_fips: String,
    /// Cumulative count per date column. Empty or non-numeric cells are
    /// `None`, never zero.
    pub values: Vec<Option<u64>>,
}

/// Parse the wide CSV into a [`CaseTable`].
///
/// Fails only on structural problems (no header, too few leading columns).
/// Bad cells inside a row are preserved as `None` so the cleaner can report
/// them as drops instead of aborting the whole load.
pub fn parse_case_table(text: &str) -> Result<CaseTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers().context("reading case file header")?.clone();
    if headers.len() <= META_COLUMNS {
        bail!(
            "case file header has {} columns, expected metadata plus at least one date column",
            headers.len()
        );
    }
    let date_labels: Vec<String> = headers
        .iter()
        .skip(META_COLUMNS)
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("reading case file row {}", i + 1))?;
        if record.len() <= META_COLUMNS {
            debug!(row = i + 1, columns = record.len(), "skipping short row");
            continue;
        }
        let values = record
            .iter()
            .skip(META_COLUMNS)
            .map(|cell| {
                let cell = cell.trim();
                if cell.is_empty() {
                    None
                } else {
                    cell.parse::<u64>().ok()
                }
            })
            .collect();
        rows.push(RawCountyRow {
            county_fips: record[0].trim().to_string(),
            county_name: record[1].trim().to_string(),
            state: record[2].trim().to_string(),
            state_fips: record[3].trim().to_string(),
            values,
        });
    }

    debug!(
        rows = rows.len(),
        dates = date_labels.len(),
        "parsed case table"
    );
    Ok(CaseTable { date_labels, rows })
}
