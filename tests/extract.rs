// tests/extract.rs
//
// Table extraction behavior: first table only, td-only cells, empty-cell
// filtering, ragged rows preserved.

use datadash::extract::first_table;
use datadash::s;
use datadash::scrape::ScrapeError;

#[test]
fn returns_rows_in_document_order() {
    let html = "<html><body><table>\
        <tr><td>a1</td><td>a2</td></tr>\
        <tr><td>b1</td><td>b2</td></tr>\
        <tr><td>c1</td><td>c2</td></tr>\
        </table></body></html>";

    let rows = first_table(html).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], vec!["a1", "a2"]);
    assert_eq!(rows[1], vec!["b1", "b2"]);
    assert_eq!(rows[2], vec!["c1", "c2"]);
}

#[test]
fn no_table_returns_none() {
    let html = "<html><body><p>no tables here</p><div>still none</div></body></html>";
    assert!(first_table(html).is_none());
}

#[test]
fn only_the_first_table_is_read() {
    let html = "<table><tr><td>first</td></tr></table>\
                <table><tr><td>second</td></tr><tr><td>ignored</td></tr></table>";

    let rows = first_table(html).unwrap();
    assert_eq!(rows, vec![vec![s!("first")]]);
}

#[test]
fn empty_cells_are_dropped_within_a_row() {
    // The documented scenario: ["a"] then ["b", "c"].
    let html = "<table><tr><td>a</td><td></td></tr><tr><td>b</td><td>c</td></tr></table>";

    let rows = first_table(html).unwrap();
    assert_eq!(rows, vec![vec![s!("a")], vec![s!("b"), s!("c")]]);
}

#[test]
fn all_empty_row_stays_as_empty_row() {
    let html = "<table>\
        <tr><td></td><td>  </td></tr>\
        <tr><td>x</td></tr>\
        </table>";

    let rows = first_table(html).unwrap();
    assert_eq!(rows.len(), 2, "empty row must not be omitted");
    assert!(rows[0].is_empty());
    assert_eq!(rows[1], vec!["x"]);
}

#[test]
fn th_cells_are_not_collected() {
    // A header-only first row yields an empty first row.
    let html = "<table>\
        <tr><th>Name</th><th>Price</th></tr>\
        <tr><td>Boots</td><td>120</td></tr>\
        </table>";

    let rows = first_table(html).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].is_empty());
    assert_eq!(rows[1], vec!["Boots", "120"]);
}

#[test]
fn cell_text_is_trimmed_and_stays_textual() {
    let html = "<table><tr>\
        <td>  spaced  </td>\
        <td><b>nested</b> tags</td>\
        <td>007</td>\
        </tr></table>";

    let rows = first_table(html).unwrap();
    assert_eq!(rows[0][0], "spaced");
    assert_eq!(rows[0][1], "nested tags");
    // numeric-looking text is not coerced
    assert_eq!(rows[0][2], "007");
}

#[test]
fn ragged_rows_are_preserved_not_padded() {
    let html = "<table>\
        <tr><td>a</td><td>b</td><td>c</td></tr>\
        <tr><td>d</td></tr>\
        </table>";

    let rows = first_table(html).unwrap();
    assert_eq!(rows[0].len(), 3);
    assert_eq!(rows[1].len(), 1);
}

#[test]
fn bad_url_is_a_request_error_not_extraction() {
    let err = datadash::scrape::scrape_table("definitely not a url").unwrap_err();
    assert!(err.is_request());
    assert!(matches!(err, ScrapeError::BadUrl(_)));

    // and the extraction failure is the one non-request variant
    assert!(!ScrapeError::NoTable.is_request());
}
