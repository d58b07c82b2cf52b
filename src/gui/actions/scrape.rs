// src/gui/actions/scrape.rs
use crate::{gui::app::App, scrape};

pub fn scrape(app: &mut App) {
    let url = app.state.options.scrape.url.trim().to_string();
    logf!("Scrape: Begin url={}", url);

    // → This is where the scrape happens ←
    match scrape::scrape_table(&url) {
        Ok(ds) => {
            logf!("Scrape: OK rows={}", ds.row_count());
            app.status(format!("Scraped {} row(s)", ds.row_count()));
            app.scraped = Some(ds);
        }
        Err(e) => {
            // Request failures and "no table" read differently to the user.
            if e.is_request() {
                loge!("Scrape: Request error: {}", e);
                app.status(format!("Request error: {e}"));
            } else {
                loge!("Scrape: Extraction error: {}", e);
                app.status(format!("Scrape error: {e}"));
            }
            app.scraped = None;
        }
    }
}
