/// County names (minus the " County" suffix) that belong to New York City.
pub static NYC_COUNTIES: &[&str] = &["Kings", "New York", "Bronx", "Queens", "Richmond"];

/// State code the source rows must carry to be considered.
pub const TARGET_STATE: &str = "NY";

/// Canonical borough names, matching `properties.name` in the boundary file.
pub static BOROUGHS: &[&str] = &["Brooklyn", "Manhattan", "Staten Island", "Bronx", "Queens"];

/// Map a county name to its borough display name. Counties whose county and
/// borough names already agree (and any unrecognized input) pass through
/// unchanged.
pub fn canonical_borough(name: &str) -> &str {
    match name {
        "Kings" => "Brooklyn",
        "New York" => "Manhattan",
        "Richmond" => "Staten Island",
        other => other,
    }
}

/// Strip a trailing `" County"` suffix if present.
pub fn strip_county_suffix(name: &str) -> &str {
    name.strip_suffix(" County").unwrap_or(name)
}
