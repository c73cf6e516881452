use std::fs;
use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

const REQUEST_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_SOURCE: &str = "match.csv";

static CLIENT: OnceCell<Client> = OnceCell::new();

fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")
    })
}

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Fetch the raw schedule table from a filesystem path or an http(s) URL.
/// The remote path mirrors the original page fetching `match.csv` from its
/// static file server.
pub fn load_schedule_text(source: &str) -> Result<String> {
    if is_remote(source) {
        let response = http_client()?
            .get(source)
            .send()
            .context("schedule request failed")?
            .error_for_status()
            .context("schedule request rejected")?;
        response.text().context("schedule body unreadable")
    } else {
        fs::read_to_string(source).with_context(|| format!("failed to read {source}"))
    }
}
