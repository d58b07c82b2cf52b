// src/gui/actions/mod.rs
pub mod export;
pub mod feedback;
pub mod scrape;
