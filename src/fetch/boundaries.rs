use anyhow::{Context, Result};
use serde::Deserialize;

use crate::process::normalize::BOROUGHS;

/// The borough boundary file: a GeoJSON feature collection where each
/// feature's `properties.name` is a canonical borough name. Geometry is
/// kept opaque; the map renderer draws it, the pipeline only needs the
/// names for linkage.
#[derive(Debug, Clone, Deserialize)]
pub struct BoroughCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<BoroughFeature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoroughFeature {
    pub properties: BoroughProperties,
    #[serde(default)]
    pub geometry: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoroughProperties {
    pub name: String,
}

impl BoroughCollection {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(|f| f.properties.name.as_str())
    }

    /// Feature names that are not canonical borough names. Non-empty output
    /// means hover events from the map would never match a chart series.
    pub fn unlinked_names(&self) -> Vec<&str> {
        self.names().filter(|n| !BOROUGHS.contains(n)).collect()
    }
}

pub fn parse_boundaries(text: &str) -> Result<BoroughCollection> {
    serde_json::from_str(text).context("parsing borough boundary file")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"name": "Brooklyn"},
             "geometry": {"type": "Polygon", "coordinates": []}},
            {"type": "Feature", "properties": {"name": "Bronx"},
             "geometry": {"type": "Polygon", "coordinates": []}}
        ]
    }"#;

    #[test]
    fn parses_feature_names() {
        let coll = parse_boundaries(SAMPLE).unwrap();
        assert_eq!(coll.kind, "FeatureCollection");
        assert_eq!(coll.names().collect::<Vec<_>>(), vec!["Brooklyn", "Bronx"]);
        assert!(coll.unlinked_names().is_empty());
    }

    #[test]
    fn flags_names_that_cannot_link_to_the_series() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [{"type": "Feature", "properties": {"name": "Kings"}, "geometry": null}]
        }"#;
        let coll = parse_boundaries(text).unwrap();
        assert_eq!(coll.unlinked_names(), vec!["Kings"]);
    }

    #[test]
    fn rejects_non_geojson_input() {
        assert!(parse_boundaries("[1, 2, 3]").is_err());
    }
}
