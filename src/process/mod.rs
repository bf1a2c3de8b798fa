pub mod clean;
pub mod date_parser;
pub mod group;
pub mod normalize;
pub mod select;
pub mod types;

pub use clean::clean;
pub use group::group_by_date;
pub use select::select_value;
pub use types::{CleanOutcome, DateGroup, Dropped, Record, CUTOFF_DATE};
