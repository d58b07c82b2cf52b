// src/net.rs
// Synchronous one-shot HTTP GET with an explicit timeout.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::scrape::ScrapeError;

/// Perform a blocking GET and return the response body as text.
///
/// The URL is validated up front so a garbage string fails as a request
/// error before any connection is attempted. Non-2xx statuses are errors.
pub fn fetch_text(url: &str) -> Result<String, ScrapeError> {
    let url = Url::parse(url.trim())?;

    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(url).send()?.error_for_status()?;
    Ok(resp.text()?)
}
