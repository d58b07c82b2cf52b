// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active section index into router::PAGES
    pub current_page_index: usize,

    /// Dataset picked in the Home/Download selectors
    pub selected_dataset: usize,

    /// Rate page: 1–5 stars, free-text comment
    pub rating: u8,
    pub comment_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            selected_dataset: 0,
            rating: 3,
            comment_text: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
