use crate::process::types::DateGroup;

/// Pick the chart y-value for one date group.
///
/// With no active borough the value is the sum over every borough present
/// on that date. With an active borough it is that borough's own count, or
/// `None` when the borough has no record for the date. The miss is a
/// distinct "no data" result and must not collapse to zero or fall back to
/// the sum; either substitution would reshape the highlighted curve.
pub fn select_value(group: &DateGroup, active_borough: Option<&str>) -> Option<u64> {
    match active_borough {
        None => Some(group.values.iter().map(|r| r.cases).sum()),
        Some(borough) => group
            .values
            .iter()
            .find(|r| r.borough == borough)
            .map(|r| r.cases),
    }
}
