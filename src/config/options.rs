// src/config/options.rs
use crate::csv::Delim;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// The four dashboard sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Scrape,
    Download,
    Rate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// User-supplied URL; fetched as-is, one GET per Scrape click.
    pub url: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self { url: s!(super::consts::DEFAULT_SCRAPE_URL) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> Delim {
        match self { ExportFormat::Csv => Delim::Csv, ExportFormat::Tsv => Delim::Tsv }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
        }
    }
}
