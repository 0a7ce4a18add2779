// src/fetch.rs

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use url::Url;

const USER_AGENT: &str = concat!("statscraper/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client. No timeout unless one is configured.
pub fn client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }
    builder.build().context("building HTTP client")
}

/// Single GET, body returned as text whatever the status.
/// A non-success status is logged, not raised.
#[instrument(level = "info", skip(client))]
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let url = Url::parse(url).with_context(|| format!("parsing URL {}", url))?;

    debug!("Fetching text from {}", url);
    let resp = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?;

    let status = resp.status();
    if !status.is_success() {
        warn!(%url, %status, "non-success status; continuing with body");
    }

    let body = resp
        .text()
        .await
        .with_context(|| format!("Reading text from {}", url))?;
    info!(%url, %status, bytes = body.len(), "fetched page");
    Ok(body)
}
