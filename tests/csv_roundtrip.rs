// tests/csv_roundtrip.rs
//
// Download round-trip: dataset → serialized text → reparse must preserve
// dimensions and cell values (quotes, separators, embedded newlines).

use std::fs;
use std::path::PathBuf;

use datadash::csv::{parse_rows, rows_to_string, split_headers, Delim};
use datadash::file::write_table;
use datadash::s;
use datadash::store::load_dataset;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("datadash_csv_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn roundtrip_preserves_dimensions_and_cells() {
    let headers = Some(vec![s!("name"), s!("note"), s!("price")]);
    let rows = vec![
        vec![s!("Boots"), s!("says \"great\""), s!("120")],
        vec![s!("Sandals, red"), s!("line1\nline2"), s!("35")],
    ];

    let text = rows_to_string(&headers, &rows, Delim::Csv);
    let (h2, r2) = split_headers(parse_rows(&text, Delim::Csv));

    assert_eq!(h2, headers);
    assert_eq!(r2, rows);
}

#[test]
fn roundtrip_tsv() {
    let headers = Some(vec![s!("a"), s!("b")]);
    let rows = vec![vec![s!("1"), s!("two\twords")]];

    let text = rows_to_string(&headers, &rows, Delim::Tsv);
    let (h2, r2) = split_headers(parse_rows(&text, Delim::Tsv));

    assert_eq!(h2, headers);
    assert_eq!(r2, rows);
}

#[test]
fn ragged_rows_survive_serialization() {
    let rows = vec![
        vec![s!("a"), s!("b"), s!("c")],
        vec![s!("d")],
        vec![s!("e"), s!("f")],
    ];

    let text = rows_to_string(&None, &rows, Delim::Csv);
    let parsed = parse_rows(&text, Delim::Csv);

    assert_eq!(parsed, rows);
}

#[test]
fn exported_file_loads_back_identically() {
    // Full download path: latin-1 source file → DataSet → exported UTF-8 CSV
    // → reloaded DataSet with the same shape and values.
    let dir = tmp_dir("e2e");
    let src = dir.join("vetements.csv");
    fs::write(&src, b"cat\xe9gorie,prix\nV\xeatement,50\nChaussure,80\n").unwrap();

    let original = load_dataset(&src).unwrap();

    let out = dir.join("download.csv");
    write_table(&out, &original.headers, &original.rows, Delim::Csv).unwrap();

    let reloaded = load_dataset(&out).unwrap();
    assert_eq!(reloaded.headers, original.headers);
    assert_eq!(reloaded.rows, original.rows);
    assert_eq!(reloaded.col_count(), original.col_count());
}

#[test]
fn write_table_creates_parent_directories() {
    let dir = tmp_dir("mkdirs");
    let out = dir.join("nested").join("deep").join("out.csv");

    let rows = vec![vec![s!("x")]];
    let written = write_table(&out, &None, &rows, Delim::Csv).unwrap();

    assert_eq!(written, out);
    assert_eq!(fs::read_to_string(&out).unwrap(), "x\n");
}
