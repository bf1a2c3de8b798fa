//! Cumulative case counts by NYC borough, reshaped for a linked map and
//! stacked area chart.
//!
//! The pipeline turns the wide county-level CSV into per-borough, per-date
//! records ([`process::clean`]), buckets them by date ([`process::group_by_date`]),
//! and picks chart y-values per bucket ([`process::select_value`]), switching
//! between the all-borough sum and a single borough's value based on the
//! hover highlight ([`state::Highlight`]). Loading of the CSV and the
//! borough boundary file lives in [`fetch`]; drawing is left to the
//! consuming renderer.

pub mod fetch;
pub mod process;
pub mod state;
