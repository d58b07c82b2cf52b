// src/config/datasets.rs
//
// Injected dataset configuration: an ordered name → path map.
// Nothing below the config layer hardcodes file locations, so tests can
// point a DatasetCache at any scratch directory.

use std::env;
use std::path::{Path, PathBuf};

use super::consts::{DATASET_FILES, DATA_DIR_ENV, DEFAULT_DATA_DIR};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetConfig {
    entries: Vec<(String, PathBuf)>,
}

impl DatasetConfig {
    /// The stock four datasets rooted at `dir`.
    pub fn stock(dir: &Path) -> Self {
        let entries = DATASET_FILES
            .iter()
            .map(|(name, file)| (s!(*name), dir.join(file)))
            .collect();
        Self { entries }
    }

    /// Stock config rooted at `data/`, overridable via DATADASH_DATA_DIR.
    pub fn from_env() -> Self {
        let dir = env::var(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));
        Self::stock(&dir)
    }

    /// Arbitrary name → path entries (tests, custom deployments).
    pub fn from_entries(entries: Vec<(String, PathBuf)>) -> Self {
        Self { entries }
    }

    /// Dataset names in menu order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn path_for(&self, name: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p.as_path())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), p.as_path()))
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self::stock(Path::new(DEFAULT_DATA_DIR))
    }
}
