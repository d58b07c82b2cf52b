// src/scrape.rs
//
// One fetch-and-extract cycle per request: GET the URL, pull the first
// HTML table out of the body. No retries, no background work.

use thiserror::Error;

use crate::{extract, net, store::DataSet};

/// What went wrong during a scrape. Request-level failures (bad URL,
/// timeout, non-2xx) are kept distinct from extraction failures so the
/// UI can report them differently.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid url: {0}")]
    BadUrl(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("no table found in the document")]
    NoTable,
}

impl ScrapeError {
    /// True for request-level failures, false for extraction failures.
    pub fn is_request(&self) -> bool {
        !matches!(self, ScrapeError::NoTable)
    }
}

/// Fetch `url` and extract the first table of the response body.
/// Extracted tables never carry headers; `th` cells are not collected.
pub fn scrape_table(url: &str) -> Result<DataSet, ScrapeError> {
    let body = net::fetch_text(url)?;
    let rows = extract::first_table(&body).ok_or(ScrapeError::NoTable)?;
    Ok(DataSet { headers: None, rows })
}
