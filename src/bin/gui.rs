// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use datadash::config::datasets::DatasetConfig;
use datadash::gui;

fn main() {
    let options = eframe::NativeOptions::default();
    let config = DatasetConfig::from_env();

    if let Err(e) = gui::run(config, options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
