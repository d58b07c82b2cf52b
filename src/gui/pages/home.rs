// src/gui/pages/home.rs
use eframe::egui;

use crate::config::options::PageKind::{ self, * };
use crate::gui::{app::App, components::data_table};

use super::Page;

pub struct HomePage;
pub static PAGE: HomePage = HomePage;

impl Page for HomePage {
    fn kind(&self) -> PageKind { Home }
    fn title(&self) -> &'static str { "Home" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.label("Welcome to My Data App! Use the menu on the left to navigate.");
        ui.add_space(8.0);

        // ---- Summary of available data ----
        ui.strong("Available datasets");
        let names: Vec<String> = app.cache.names().iter().map(|n| s!(*n)).collect();
        for name in &names {
            let ds = app.cache.dataset(name);
            ui.label(format!("{}: {} rows, {} columns", name, ds.row_count(), ds.col_count()));
        }

        // Load warnings (missing/unreadable files degrade to empty tables)
        let warnings: Vec<String> = app.cache.warnings().to_vec();
        for w in &warnings {
            ui.colored_label(egui::Color32::from_rgb(220, 30, 30), format!("⚠ {w}"));
        }

        if ui.button("Reload datasets").clicked() {
            app.cache.invalidate();
            app.cache.ensure_loaded();
            app.status("Reloaded local data");
        }

        ui.separator();

        // ---- Pick a dataset to preview ----
        let mut selected = app.state.gui.selected_dataset;
        egui::ComboBox::from_label("Dataset")
            .selected_text(names.get(selected).cloned().unwrap_or_default())
            .show_ui(ui, |ui| {
                for (i, name) in names.iter().enumerate() {
                    ui.selectable_value(&mut selected, i, name);
                }
            });
        if selected != app.state.gui.selected_dataset {
            app.state.gui.selected_dataset = selected;
            app.refresh_out_path();
            logd!("UI: Dataset selection → {:?}", names.get(selected));
        }

        if let Some(name) = names.get(selected) {
            let ds = app.cache.dataset(name);
            ui.label(format!("Preview: {} ({} rows, {} columns)", name, ds.row_count(), ds.col_count()));
            data_table::draw(ui, "home_preview", ds);
        }
    }
}
