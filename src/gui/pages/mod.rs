// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::options::PageKind;
use crate::gui::app::App;

pub mod download;
pub mod home;
pub mod rate;
pub mod scrape;

/// One dashboard section. Pages are stateless statics; everything they
/// show or mutate lives in `App`.
pub trait Page: Send + Sync + 'static {
    fn kind(&self) -> PageKind;
    fn title(&self) -> &'static str;

    /// Draw the page body. Runs on the UI thread; any action triggered
    /// here (fetch, export, append) completes before the frame returns.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}
