use anyhow::Result;
use clap::Parser;
use statscraper::{
    config::{self, Config, Source},
    pipeline,
};
use std::{path::PathBuf, time::Duration};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Scrape the all-time-by-season batting table into SQLite and chart runs per year.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Page holding the stats table
    #[arg(long, env = "STATS_URL", default_value = config::DEFAULT_URL)]
    url: String,

    /// Read a saved copy of the page instead of fetching `--url`
    #[arg(long)]
    html_file: Option<PathBuf>,

    /// SQLite database file, created if missing
    #[arg(long, env = "STATS_DB", default_value = config::DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Team code whose runs get charted
    #[arg(long, env = "STATS_TEAM", default_value = config::DEFAULT_TEAM)]
    team: String,

    /// Output path of the SVG chart
    #[arg(long, env = "STATS_CHART", default_value = config::DEFAULT_CHART_PATH)]
    chart: PathBuf,

    /// Stored rows to print after loading
    #[arg(long, default_value_t = config::DEFAULT_REPORT_LIMIT)]
    report_limit: usize,

    /// HTTP timeout in seconds; no timeout when unset
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let source = match args.html_file {
            Some(path) => Source::File(path),
            None => Source::Url(args.url),
        };
        Config {
            source,
            db_path: args.db,
            team: args.team,
            chart_path: args.chart,
            report_limit: args.report_limit,
            timeout: args.timeout_secs.map(Duration::from_secs),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging (stderr; stdout carries the report) ─────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // ─── 2) configure ────────────────────────────────────────────────
    let config: Config = Args::parse().into();
    info!(?config, "startup");

    // ─── 3) fetch → store → report → chart ──────────────────────────
    let summary = pipeline::run(&config).await?;
    info!(
        inserted = summary.load.inserted,
        dropped = summary.load.dropped,
        total = summary.stored_total,
        chart = %summary.chart_path.display(),
        "all done"
    );
    Ok(())
}
