// src/gui/components/menu_panel.rs
//
// Left navigation: app title, the four sections, footer.
// Performs the section switch itself.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("My Data App");
    ui.separator();

    let pages = router::all_pages();
    let cur = app.current_index();

    for (idx, page) in pages.iter().enumerate() {
        let selected = idx == cur;
        if ui.selectable_label(selected, page.title()).clicked() && !selected {
            let prev = app.current_page().kind();
            app.set_current_index(idx);
            logf!("UI: Section switch {:?} → {:?}", prev, page.kind());
        }
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
        ui.weak("© 2025 My Data App");
    });
}
