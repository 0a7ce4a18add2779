// src/config.rs

use std::{path::PathBuf, time::Duration};

/// Page carrying the all-time-by-season batting table.
pub const DEFAULT_URL: &str = "https://www.mlb.com/stats/san-francisco-giants/all-time-by-season";
pub const DEFAULT_DB_PATH: &str = "baseball_stats.db";
pub const STATS_TABLE: &str = "baseball_stats";
pub const DEFAULT_TEAM: &str = "SF";
pub const DEFAULT_CHART_PATH: &str = "giants_runs.svg";
pub const DEFAULT_REPORT_LIMIT: usize = 5;

/// Where the HTML comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

/// Everything one run needs; built by the binary from CLI args / env.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: Source,
    pub db_path: PathBuf,
    pub team: String,
    pub chart_path: PathBuf,
    pub report_limit: usize,
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: Source::Url(DEFAULT_URL.to_string()),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            team: DEFAULT_TEAM.to_string(),
            chart_path: PathBuf::from(DEFAULT_CHART_PATH),
            report_limit: DEFAULT_REPORT_LIMIT,
            timeout: None,
        }
    }
}
