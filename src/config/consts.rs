// src/config/consts.rs

// Net config
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "datadash/0.1";

// Datasets
// The stock deployment ships four CSV files, exported from the source site
// in ISO-8859-1. Display name → file name, in menu order.
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DATA_DIR_ENV: &str = "DATADASH_DATA_DIR";
pub const DATASET_FILES: &[(&str, &str)] = &[
    ("Kids Shoes", "Chauss_enfant.csv"),
    ("Men's Shoes", "chaussure_homme.csv"),
    ("Kids Clothing", "vetement_enfant.csv"),
    ("Men's Clothing", "Vet_homme.csv"),
];

// Feedback
pub const FEEDBACK_FILE: &str = "feedback.txt";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";

// Scrape
pub const DEFAULT_SCRAPE_URL: &str = "https://example.com";
