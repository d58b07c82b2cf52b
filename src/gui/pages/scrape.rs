// src/gui/pages/scrape.rs
use eframe::egui;

use crate::config::options::PageKind::{ self, * };
use crate::gui::{actions, app::App, components::data_table};

use super::Page;

pub struct ScrapePage;
pub static PAGE: ScrapePage = ScrapePage;

impl Page for ScrapePage {
    fn kind(&self) -> PageKind { Scrape }
    fn title(&self) -> &'static str { "Scrape data" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.label("Fetch a URL and extract the first HTML table on the page.");

        ui.horizontal(|ui| {
            ui.label("URL:");
            ui.add(
                egui::TextEdit::singleline(&mut app.state.options.scrape.url)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(420.0),
            );
        });

        // One fetch-and-render cycle per click; blocks the UI thread briefly.
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        if ui
            .add(egui::Button::new(egui::RichText::new("SCRAPE").color(black).strong()).fill(red))
            .clicked()
        {
            actions::scrape::scrape(app);
        }

        ui.separator();

        match &app.scraped {
            Some(ds) => {
                ui.label(format!("Extracted table: {} row(s)", ds.row_count()));
                data_table::draw(ui, "scraped_table", ds);
            }
            None => {
                ui.weak("No table scraped yet.");
            }
        }
    }
}
