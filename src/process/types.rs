use chrono::NaiveDate;
use serde::Serialize;

/// One normalized observation: cumulative cases for one borough on one date.
///
/// Records only exist at or after [`CUTOFF_DATE`], carry a canonical borough
/// name, and always have a value; anything else was dropped by the cleaner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub date: NaiveDate,
    pub cases: u64,
    pub borough: String,
}

/// Earliest date admitted into the series (inclusive).
pub const CUTOFF_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2020, 3, 7) {
    Some(d) => d,
    None => unreachable!(),
};

/// All records sharing one date, keyed by the date's ISO string form.
///
/// Groups come out of [`group_by_date`](super::group::group_by_date) in
/// first-seen key order; `values` keeps input order. Derived view only,
/// recomputed from the record sequence rather than mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateGroup {
    pub key: String,
    pub values: Vec<Record>,
}

/// Why the cleaner excluded a row or a (label, value) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dropped {
    /// Row's county is not one of the five NYC counties.
    UnrecognizedCounty(String),
    /// Row's county name matched but its state code did not.
    OutOfState { county: String, state: String },
    /// Column label did not parse as a calendar date.
    UnparseableLabel(String),
    /// Observation predates the cutoff.
    BeforeCutoff { label: String },
    /// Cell was empty or unreadable; dropped rather than coerced to zero.
    MissingValue { borough: String, label: String },
}

/// Cleaner output: the accepted record sequence plus every exclusion, so
/// the silent-drop policy stays observable without becoming fatal.
#[derive(Debug, Clone, Default)]
pub struct CleanOutcome {
    pub records: Vec<Record>,
    pub dropped: Vec<Dropped>,
}

impl CleanOutcome {
    /// Per-reason drop counts, in declaration order: unrecognized county,
    /// out of state, unparseable label, before cutoff, missing value.
    pub fn drop_counts(&self) -> [usize; 5] {
        let mut counts = [0usize; 5];
        for d in &self.dropped {
            let idx = match d {
                Dropped::UnrecognizedCounty(_) => 0,
                Dropped::OutOfState { .. } => 1,
                Dropped::UnparseableLabel(_) => 2,
                Dropped::BeforeCutoff { .. } => 3,
                Dropped::MissingValue { .. } => 4,
            };
            counts[idx] += 1;
        }
        counts
    }
}
