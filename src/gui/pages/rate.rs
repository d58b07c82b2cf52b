// src/gui/pages/rate.rs
use eframe::egui;

use crate::config::options::PageKind::{ self, * };
use crate::gui::{actions, app::App};

use super::Page;

pub struct RatePage;
pub static PAGE: RatePage = RatePage;

impl Page for RatePage {
    fn kind(&self) -> PageKind { Rate }
    fn title(&self) -> &'static str { "Rate the app" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.label("Please rate the application");

        ui.add(
            egui::Slider::new(&mut app.state.gui.rating, 1..=5)
                .text("stars")
                .integer(),
        );

        ui.label("Comment:");
        ui.add(
            egui::TextEdit::multiline(&mut app.state.gui.comment_text)
                .hint_text("Enter your comment here...")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );

        if ui.button("Submit").clicked() {
            actions::feedback::submit(app);
        }
    }
}
