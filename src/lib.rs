// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;

pub mod csv;
pub mod encoding;
pub mod extract;
pub mod feedback;
pub mod file;
pub mod gui;
pub mod net;
pub mod scrape;
pub mod store;
