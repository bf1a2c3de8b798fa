pub mod boundaries;
pub mod cases;

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::sync::OnceCell;
use tracing::info;

pub use boundaries::BoroughCollection;
pub use cases::CaseTable;

/// Fetch a source as text: HTTP(S) URLs go through the shared client,
/// anything else is treated as a local path.
pub async fn read_source(client: &Client, source: &str) -> Result<String> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let resp = client
            .get(source)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("fetching {source}"))?;
        resp.text().await.with_context(|| format!("reading body of {source}"))
    } else {
        tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("reading {source}"))
    }
}

/// The two external inputs, each loaded at most once per process.
///
/// Both accessors gate on an empty cell, so awaiting them repeatedly (as a
/// re-rendering caller will) never duplicates a load. The loads are
/// independent; callers that need both should `try_join!` them. A failed
/// load leaves the cell empty and bubbles the error to the caller.
#[derive(Default)]
pub struct Resources {
    cases: OnceCell<CaseTable>,
    boundaries: OnceCell<BoroughCollection>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn cases(&self, client: &Client, source: &str) -> Result<&CaseTable> {
        self.cases
            .get_or_try_init(|| async {
                info!(%source, "loading case table");
                let text = read_source(client, source).await?;
                cases::parse_case_table(&text)
            })
            .await
    }

    pub async fn boundaries(&self, client: &Client, source: &str) -> Result<&BoroughCollection> {
        self.boundaries
            .get_or_try_init(|| async {
                info!(%source, "loading borough boundaries");
                let text = read_source(client, source).await?;
                boundaries::parse_boundaries(&text)
            })
            .await
    }

    /// Renderer precondition: both inputs present, in either load order.
    pub fn ready(&self) -> bool {
        self.cases.initialized() && self.boundaries.initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CSV: &str = "\
countyFIPS,County Name,State,StateFIPS,3/7/20,3/8/20
36047,Kings County,NY,36,2,5
";

    fn write_temp(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[tokio::test]
    async fn loads_case_table_from_a_path_once() {
        let file = write_temp(CSV);
        let path = file.path().to_str().unwrap().to_string();
        let client = Client::new();
        let resources = Resources::new();

        let first = resources.cases(&client, &path).await.unwrap();
        assert_eq!(first.rows.len(), 1);

        // Rewrite the file; a second call must serve the cached parse.
        std::fs::write(file.path(), "countyFIPS,County Name,State,StateFIPS,3/7/20\n").unwrap();
        let second = resources.cases(&client, &path).await.unwrap();
        assert_eq!(second.rows.len(), 1);
        assert!(std::ptr::eq(first, second));
    }

    #[tokio::test]
    async fn failed_load_leaves_the_cell_empty_for_retry_by_caller() {
        let client = Client::new();
        let resources = Resources::new();
        assert!(resources
            .cases(&client, "/nonexistent/covid_confirmed_usafacts.csv")
            .await
            .is_err());
        assert!(!resources.ready());

        let file = write_temp(CSV);
        let path = file.path().to_str().unwrap().to_string();
        assert!(resources.cases(&client, &path).await.is_ok());
    }

    #[tokio::test]
    async fn ready_requires_both_resources_in_any_order() {
        let geojson = write_temp(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "properties": {"name": "Queens"}, "geometry": null}
            ]}"#,
        );
        let csv = write_temp(CSV);
        let client = Client::new();
        let resources = Resources::new();
        assert!(!resources.ready());

        resources
            .boundaries(&client, geojson.path().to_str().unwrap())
            .await
            .unwrap();
        assert!(!resources.ready());

        resources
            .cases(&client, csv.path().to_str().unwrap())
            .await
            .unwrap();
        assert!(resources.ready());
    }
}
