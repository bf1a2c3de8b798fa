use chrono::NaiveDate;

/// Parse a column date label into a calendar date.
///
/// The source file labels its date columns `M/D/YY` (no zero padding);
/// re-exports of the same data sometimes carry `M/D/YYYY` or ISO
/// `YYYY-MM-DD`. Anything else is `None`.
pub fn parse_date_label(label: &str) -> Option<NaiveDate> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }
    for fmt in ["%m/%d/%y", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(label, fmt) {
            return Some(date);
        }
    }
    // ISO labels always carry a four-digit year; without the shape check
    // chrono would read a dash-date like "3-7-20" as year 3.
    let bytes = label.as_bytes();
    if bytes.len() >= 8 && bytes[..4].iter().all(u8::is_ascii_digit) && bytes[4] == b'-' {
        return NaiveDate::parse_from_str(label, "%Y-%m-%d").ok();
    }
    None
}
