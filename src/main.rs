use anyhow::Result;
use borocases::{
    fetch::Resources,
    process::{clean, group_by_date, select_value},
    state::HighlightController,
};
use reqwest::Client;
use std::env;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_CASES_SOURCE: &str = "covid_confirmed_usafacts.csv";
const DEFAULT_BOUNDARIES_SOURCE: &str = "new-york-city-boroughs.geojson.json";

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) resolve sources ──────────────────────────────────────────
    let mut args = env::args().skip(1);
    let cases_source = args.next().unwrap_or_else(|| DEFAULT_CASES_SOURCE.to_string());
    let boundaries_source = args
        .next()
        .unwrap_or_else(|| DEFAULT_BOUNDARIES_SOURCE.to_string());
    let hover_borough = args.next();

    // ─── 3) load both resources, order-independent ──────────────────
    let client = Client::new();
    let resources = Resources::new();
    let (table, boundaries) = tokio::try_join!(
        resources.cases(&client, &cases_source),
        resources.boundaries(&client, &boundaries_source),
    )?;
    info!(
        rows = table.rows.len(),
        dates = table.date_labels.len(),
        features = boundaries.features.len(),
        "resources loaded"
    );

    let unlinked = boundaries.unlinked_names();
    if !unlinked.is_empty() {
        warn!(?unlinked, "boundary features that will never match a series");
    }

    // ─── 4) clean into the normalized series ─────────────────────────
    let outcome = clean(table);
    let [county, state, label, cutoff, missing] = outcome.drop_counts();
    info!(
        records = outcome.records.len(),
        unrecognized_county = county,
        out_of_state = state,
        unparseable_label = label,
        before_cutoff = cutoff,
        missing_value = missing,
        "cleaned series"
    );

    // ─── 5) aggregate by date ────────────────────────────────────────
    let groups = group_by_date(&outcome.records);
    info!(groups = groups.len(), "grouped by date");

    // ─── 6) emit the chart series ────────────────────────────────────
    let mut controller = HighlightController::new();
    if let Some(borough) = &hover_borough {
        controller.on_hover(borough);
    }
    let highlight = controller.snapshot();

    for group in &groups {
        let total = select_value(group, None);
        match highlight.active() {
            None => info!(date = %group.key, total = total.unwrap_or(0), "point"),
            Some(borough) => match select_value(group, Some(borough)) {
                Some(cases) => info!(
                    date = %group.key,
                    total = total.unwrap_or(0),
                    %borough,
                    cases,
                    "point"
                ),
                None => info!(
                    date = %group.key,
                    total = total.unwrap_or(0),
                    %borough,
                    "point (no data for borough)"
                ),
            },
        }
    }

    info!("done");
    Ok(())
}
