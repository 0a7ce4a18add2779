// src/pipeline.rs

use anyhow::{Context, Result};
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    time::Duration,
};
use tracing::{info, instrument};

use crate::{
    config::{Config, Source},
    extract, fetch, normalize,
    plot::{self, ChartSpec},
    report,
    store::StatsStore,
};

/// Row counts of one extract → normalize → insert pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub extracted: usize,
    pub dropped: usize,
    pub inserted: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub load: LoadSummary,
    pub stored_total: usize,
    pub reported: usize,
    pub points: usize,
    pub chart_path: PathBuf,
}

/// Fetch the page, or read a saved copy of it.
pub async fn obtain_html(source: &Source, timeout: Option<Duration>) -> Result<String> {
    match source {
        Source::Url(url) => {
            let client = fetch::client(timeout)?;
            fetch::fetch_page(&client, url).await
        }
        Source::File(path) => {
            let html = fs::read_to_string(path)
                .with_context(|| format!("reading HTML from {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "read saved page");
            Ok(html)
        }
    }
}

/// Extract the first table from `html`, normalize it and append it to `store`.
#[instrument(level = "info", skip_all)]
pub fn load_html(html: &str, store: &mut StatsStore) -> Result<LoadSummary> {
    let table = extract::extract_first_table(html)?;
    let normalized = normalize::normalize(&table)?;

    store.ensure_schema()?;
    let inserted = store.insert_all(&normalized.records)?;

    Ok(LoadSummary {
        extracted: table.rows.len(),
        dropped: normalized.dropped,
        inserted,
    })
}

/// Everything after the HTML is in hand: load, report to `out`, chart.
pub fn run_with_html<W: Write>(html: &str, config: &Config, out: W) -> Result<RunSummary> {
    let mut store = StatsStore::open(&config.db_path)?;
    let load = load_html(html, &mut store)?;
    let stored_total = store.count()?;

    let head = store.head(config.report_limit)?;
    report::print_rows(&head, out)?;

    let series = store.runs_by_year(&config.team)?;
    store.close()?;

    plot::render_to_file(&series, &ChartSpec::for_team(&config.team), &config.chart_path)?;

    let summary = RunSummary {
        load,
        stored_total,
        reported: head.len(),
        points: series.len(),
        chart_path: config.chart_path.clone(),
    };
    info!(?summary, "run complete");
    Ok(summary)
}

/// One full run: obtain HTML, load it, print the head to stdout, chart.
pub async fn run(config: &Config) -> Result<RunSummary> {
    let html = obtain_html(&config.source, config.timeout).await?;
    run_with_html(&html, config, io::stdout().lock())
}
