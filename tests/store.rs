// tests/store.rs
//
// Dataset loading and the session cache: legacy decode, header split,
// missing-file degradation, explicit invalidation.

use std::fs;
use std::path::PathBuf;

use datadash::config::datasets::DatasetConfig;
use datadash::s;
use datadash::store::{load_dataset, DatasetCache, LoadError};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("datadash_store_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn loads_header_and_rows() {
    let dir = tmp_dir("basic");
    let path = dir.join("shoes.csv");
    fs::write(&path, "name,price\nBoots,120\nSandals,35\n").unwrap();

    let ds = load_dataset(&path).unwrap();
    assert_eq!(ds.headers, Some(vec![s!("name"), s!("price")]));
    assert_eq!(ds.row_count(), 2);
    assert_eq!(ds.col_count(), 2);
    assert_eq!(ds.rows[1], vec!["Sandals", "35"]);
}

#[test]
fn decodes_latin1_bytes() {
    let dir = tmp_dir("latin1");
    let path = dir.join("kids.csv");
    // "catégorie" and "Vêtement" in ISO-8859-1: é = 0xE9, ê = 0xEA
    let bytes = b"cat\xe9gorie\nV\xeatement\n";
    fs::write(&path, bytes).unwrap();

    let ds = load_dataset(&path).unwrap();
    assert_eq!(ds.headers, Some(vec![s!("catégorie")]));
    assert_eq!(ds.rows, vec![vec![s!("Vêtement")]]);
}

#[test]
fn missing_file_is_a_distinct_error() {
    let dir = tmp_dir("missing");
    let err = load_dataset(&dir.join("nope.csv")).unwrap_err();
    assert!(matches!(err, LoadError::Missing(_)));
}

#[test]
fn cache_degrades_missing_dataset_to_empty_and_serves_the_rest() {
    let dir = tmp_dir("degrade");
    fs::write(dir.join("a.csv"), "h\n1\n").unwrap();
    fs::write(dir.join("b.csv"), "h\n1\n2\n").unwrap();
    fs::write(dir.join("c.csv"), "h\n1\n2\n3\n").unwrap();
    // d.csv deliberately absent

    let config = DatasetConfig::from_entries(vec![
        (s!("A"), dir.join("a.csv")),
        (s!("B"), dir.join("b.csv")),
        (s!("C"), dir.join("c.csv")),
        (s!("D"), dir.join("d.csv")),
    ]);

    let mut cache = DatasetCache::new(config);
    cache.ensure_loaded();

    // The missing one: 0 rows, 0 columns, one recorded warning.
    let d = cache.dataset("D");
    assert_eq!(d.row_count(), 0);
    assert_eq!(d.col_count(), 0);
    assert_eq!(cache.warnings().len(), 1);
    assert!(cache.warnings()[0].contains("D"));

    // The other three still load.
    assert_eq!(cache.dataset("A").row_count(), 1);
    assert_eq!(cache.dataset("B").row_count(), 2);
    assert_eq!(cache.dataset("C").row_count(), 3);
}

#[test]
fn invalidate_rereads_from_disk() {
    let dir = tmp_dir("invalidate");
    let path = dir.join("a.csv");
    fs::write(&path, "h\n1\n").unwrap();

    let config = DatasetConfig::from_entries(vec![(s!("A"), path.clone())]);
    let mut cache = DatasetCache::new(config);
    assert_eq!(cache.dataset("A").row_count(), 1);

    // Memoized: a disk change alone is not picked up.
    fs::write(&path, "h\n1\n2\n").unwrap();
    assert_eq!(cache.dataset("A").row_count(), 1);

    // The explicit hook is.
    cache.invalidate();
    assert_eq!(cache.dataset("A").row_count(), 2);
}

#[test]
fn unknown_name_serves_an_empty_table() {
    let config = DatasetConfig::from_entries(Vec::new());
    let mut cache = DatasetCache::new(config);
    let ds = cache.dataset("ghost");
    assert!(ds.is_empty());
}
