// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{
        consts::DEFAULT_OUT_DIR,
        datasets::DatasetConfig,
        options::PageKind,
        state::AppState,
    },
    file,
    store::{DataSet, DatasetCache},
};

use super::{components, pages::Page, router};

pub fn run(config: DatasetConfig, options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "My Data App",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(config)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // per-session dataset cache (load-once, explicit invalidation)
    pub cache: DatasetCache,

    // last scraped table; transient, replaced on every Scrape
    pub scraped: Option<DataSet>,

    // output text field UX (Download page)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status line shown under every page
    pub status: String,
}

impl App {
    pub fn new(config: DatasetConfig) -> Self {
        let state = AppState::default();

        let mut cache = DatasetCache::new(config);
        cache.ensure_loaded();

        let loaded = cache.names().len() - cache.warnings().len();
        let status = if cache.warnings().is_empty() {
            s!("Loaded local data")
        } else {
            format!(
                "Loaded {} dataset(s), {} warning(s)",
                loaded,
                cache.warnings().len()
            )
        };

        logf!(
            "Init: datasets={}, warnings={}, default page={:?}",
            cache.names().len(),
            cache.warnings().len(),
            PageKind::Home
        );

        let mut app = Self {
            state,
            cache,
            scraped: None,
            out_path_text: s!(),
            out_path_dirty: false,
            status,
        };
        app.out_path_text = app.default_out_path();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Name of the dataset picked in the selector, if any are configured.
    pub fn selected_dataset_name(&self) -> Option<String> {
        self.cache
            .names()
            .get(self.state.gui.selected_dataset)
            .map(|n| s!(*n))
    }

    /// Default export path: out/<sanitized dataset name>.<ext>
    pub fn default_out_path(&self) -> String {
        let stem = self
            .selected_dataset_name()
            .map(|n| file::sanitize_filename(&n, "dataset"))
            .unwrap_or_else(|| s!("dataset"));
        let ext = self.state.options.export.format.ext();
        format!("{DEFAULT_OUT_DIR}/{stem}.{ext}")
    }

    /// Keep the output field in sync with selection/format unless the user
    /// has typed a custom path.
    pub fn refresh_out_path(&mut self) {
        if !self.out_path_dirty {
            self.out_path_text = self.default_out_path();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("menu")
            .resizable(false)
            .show(ctx, |ui| {
                components::menu_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.current_page();
            ui.heading(page.title());
            ui.separator();

            page.draw(ui, self);

            ui.separator();
            ui.label(format!("Status: {}", self.status));
        });
    }
}
