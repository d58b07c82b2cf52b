// src/store.rs
//
// Dataset model + the per-session dataset cache.
//
// Datasets are read-only after load. The cache loads every configured file
// once, substitutes an empty table (plus a recorded warning) for anything
// missing or unreadable, and holds the result until `invalidate()`.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::datasets::DatasetConfig;
use crate::csv::{self, Delim};
use crate::encoding;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn empty() -> Self { Self::default() }

    pub fn row_count(&self) -> usize { self.rows.len() }

    /// Column count for display: header width, or the widest row.
    /// Rows may be ragged; nothing below this ever assumes rectangularity.
    pub fn col_count(&self) -> usize {
        self.headers
            .as_ref()
            .map(|h| h.len())
            .or_else(|| self.rows.iter().map(|r| r.len()).max())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.headers.is_none()
    }
}

/// Why a dataset file failed to load. `Missing` and `Unreadable` are kept
/// separate so the UI can word the warning accordingly; both degrade to an
/// empty table and never abort the session.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {0}")]
    Missing(PathBuf),

    #[error("could not read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load one dataset file: legacy-encoded bytes → UTF-8 → CSV rows.
/// The first record is the header line.
pub fn load_dataset(path: &Path) -> Result<DataSet, LoadError> {
    if !path.exists() {
        return Err(LoadError::Missing(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let text = encoding::decode_dataset(&bytes);
    let (headers, rows) = csv::split_headers(csv::parse_rows(&text, Delim::Csv));
    Ok(DataSet { headers, rows })
}

/// Session-lifetime dataset cache over an injected config.
/// Load-once, read-many; `invalidate()` is the explicit reload hook.
pub struct DatasetCache {
    config: DatasetConfig,
    loaded: Option<HashMap<String, DataSet>>,
    warnings: Vec<String>,
}

impl DatasetCache {
    pub fn new(config: DatasetConfig) -> Self {
        Self { config, loaded: None, warnings: Vec::new() }
    }

    pub fn config(&self) -> &DatasetConfig { &self.config }

    /// Dataset names in configured order.
    pub fn names(&self) -> Vec<&str> { self.config.names() }

    /// Warnings recorded during the last load pass.
    pub fn warnings(&self) -> &[String] { &self.warnings }

    /// Load every configured dataset if not already loaded.
    /// Failures degrade to empty tables; the session always has one entry
    /// per configured name.
    pub fn ensure_loaded(&mut self) {
        if self.loaded.is_some() {
            return;
        }
        let mut map = HashMap::new();
        self.warnings.clear();

        for (name, path) in self.config.iter() {
            match load_dataset(path) {
                Ok(ds) => {
                    logf!(
                        "Data: Loaded {:?} ({} rows, {} cols)",
                        name,
                        ds.row_count(),
                        ds.col_count()
                    );
                    map.insert(s!(name), ds);
                }
                Err(e) => {
                    logw!("Data: {:?} degraded to empty table: {}", name, e);
                    self.warnings.push(format!("{name}: {e}"));
                    map.insert(s!(name), DataSet::empty());
                }
            }
        }
        self.loaded = Some(map);
    }

    /// Borrow a dataset by name, loading the cache on first use.
    /// Unknown names come back as an empty table.
    pub fn dataset(&mut self, name: &str) -> &DataSet {
        self.ensure_loaded();
        static EMPTY: DataSet = DataSet { headers: None, rows: Vec::new() };
        self.loaded
            .as_ref()
            .and_then(|m| m.get(name))
            .unwrap_or(&EMPTY)
    }

    /// Drop everything; the next access rereads from disk.
    pub fn invalidate(&mut self) {
        logf!("Data: Cache invalidated");
        self.loaded = None;
        self.warnings.clear();
    }
}
