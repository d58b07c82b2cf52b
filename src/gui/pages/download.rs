// src/gui/pages/download.rs
use eframe::egui;

use crate::config::options::{ExportFormat, PageKind::{ self, * }};
use crate::csv::rows_to_string;
use crate::gui::{actions, app::App};

use super::Page;

pub struct DownloadPage;
pub static PAGE: DownloadPage = DownloadPage;

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat { Csv, Tsv }

impl Page for DownloadPage {
    fn kind(&self) -> PageKind { Download }
    fn title(&self) -> &'static str { "Download data" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.label("Export a dataset as text/csv, to a file or the clipboard.");

        // ---- Dataset selector ----
        let names: Vec<String> = app.cache.names().iter().map(|n| s!(*n)).collect();
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
            logd!("UI: Download selection → {:?}", names.get(selected));
        }

        // ---- Format + Include headers ----
        {
            let export = &mut app.state.options.export;
            let prev_fmt = match export.format {
                ExportFormat::Csv => UiFormat::Csv,
                ExportFormat::Tsv => UiFormat::Tsv,
            };
            let mut fmt = prev_fmt;

            ui.horizontal(|ui| {
                ui.label("Format:");
                ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
                ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");
            });

            if fmt != prev_fmt {
                export.format = match fmt {
                    UiFormat::Csv => ExportFormat::Csv,
                    UiFormat::Tsv => ExportFormat::Tsv,
                };
                logf!("UI: Export format → {:?}", export.format);
                app.refresh_out_path();
            }

            let export = &mut app.state.options.export;
            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        }

        // ---- Output field ----
        ui.horizontal(|ui| {
            ui.label("Output:");
            if ui
                .add(egui::TextEdit::singleline(&mut app.out_path_text)
                    .font(egui::TextStyle::Monospace))
                .changed()
            {
                app.out_path_dirty = true;
                logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
            }
        });

        // ---- Actions (Copy / Export) ----
        ui.horizontal(|ui| {
            if ui.button("Copy").clicked() {
                let name = names.get(selected).cloned();
                match name {
                    Some(name) => {
                        let include_headers = app.state.options.export.include_headers;
                        let delim = app.state.options.export.format.delim();
                        let ds = app.cache.dataset(&name);
                        if ds.is_empty() {
                            logd!("Copy: Clicked, but {:?} is empty", name);
                            app.status("Nothing to copy");
                        } else {
                            let headers = if include_headers { ds.headers.clone() } else { None };
                            let txt = rows_to_string(&headers, &ds.rows, delim);
                            logf!("Copy: dataset={:?}, rows={}", name, ds.row_count());
                            ui.ctx().copy_text(txt);
                            app.status("Copied to clipboard");
                        }
                    }
                    None => app.status("No dataset selected"),
                }
            }

            if ui.button("Export").clicked() {
                actions::export::export(app);
            }
        });
    }
}
