// src/gui/components/data_table.rs
//
// Shared table renderer. Purely a view over a DataSet; tolerates ragged
// rows (missing trailing cells simply render empty).

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder, TableBody};

use crate::store::DataSet;

pub fn draw(ui: &mut egui::Ui, id: &str, ds: &DataSet) {
    let cols = ds.col_count();
    if cols == 0 {
        ui.weak("(empty table)");
        return;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt((id, "hscroll"))
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt((id, "table"));

            for _ in 0..cols {
                table = table.column(Column::auto().resizable(true).clip(true).at_least(40.0));
            }

            let body_fn = |mut body: TableBody<'_>| {
                body.rows(20.0, ds.rows.len(), |mut row| {
                    let row_idx = row.index();
                    let data = ds.rows.get(row_idx);
                    for ci in 0..cols {
                        let cell_opt = data.and_then(|r| r.get(ci));
                        row.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            if let Some(cell) = cell_opt {
                                ui.label(cell);
                            }
                        });
                    }
                });
            };

            // Scraped tables carry no headers; skip the header strip entirely.
            match ds.headers.as_ref() {
                Some(headers) => table
                    .header(24.0, |mut header| {
                        for ci in 0..cols {
                            header.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let label = headers
                                    .get(ci)
                                    .cloned()
                                    .unwrap_or_else(|| format!("Col {}", ci + 1));
                                ui.label(RichText::new(label).strong());
                            });
                        }
                    })
                    .body(body_fn),
                None => table.body(body_fn),
            }
        });
}
