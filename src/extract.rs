// src/extract.rs
//
// The table extractor: first <table> on the page → ragged grid of strings.
// Pure function over the document text, so tests can feed crafted HTML
// without a live fetch.

use scraper::{Html, Selector};

fn selector(css: &str) -> Selector {
    // Only called with the static selectors below.
    Selector::parse(css).expect("static selector")
}

/// Extract the first `<table>` of `html` as rows of non-empty cell strings.
///
/// Returns `None` when the document has no table at all.
///
/// Policy (deliberately preserved from the original behavior):
/// - only the first table in document order; later tables are ignored
/// - only `td` cells are read; a `th`-only row comes back empty
/// - cell text is trimmed, and empty-after-trim cells are dropped, which can
///   misalign columns across rows of different lengths — callers must
///   tolerate ragged rows
/// - a row whose cells were all empty stays in the output as an empty row
pub fn first_table(html: &str) -> Option<Vec<Vec<String>>> {
    let doc = Html::parse_document(html);

    let table_sel = selector("table");
    let tr_sel = selector("tr");
    let td_sel = selector("td");

    let table = doc.select(&table_sel).next()?;

    let mut rows = Vec::new();
    for tr in table.select(&tr_sel) {
        let mut cells = Vec::new();
        for td in tr.select(&td_sel) {
            let text: String = td.text().collect();
            let text = text.trim();
            if !text.is_empty() {
                cells.push(text.to_string());
            }
        }
        rows.push(cells);
    }
    Some(rows)
}
