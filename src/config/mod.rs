// src/config/mod.rs
pub mod consts;
pub mod datasets;
pub mod options;
pub mod state;
