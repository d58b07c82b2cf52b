// src/gui/router.rs
use crate::config::options::PageKind::{ self, * };
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::home::PAGE,
    &pages::scrape::PAGE,
    &pages::download::PAGE,
    &pages::rate::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: &PageKind) -> &'static dyn Page {
    match kind {
        Home     => &pages::home::PAGE,
        Scrape   => &pages::scrape::PAGE,
        Download => &pages::download::PAGE,
        Rate     => &pages::rate::PAGE,
    }
}
