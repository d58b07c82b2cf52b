// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    let Some(name) = app.selected_dataset_name() else {
        app.status("No dataset selected");
        return;
    };

    let default_filename = {
        let stem = file::sanitize_filename(&name, "dataset");
        let ext = app.state.options.export.format.ext();
        format!("{stem}.{ext}")
    };

    let out_path = match file::resolve_out_path(app.out_path_text.trim(), &default_filename) {
        Ok(p) => p,
        Err(e) => {
            loge!("Export: Bad output path: {}", e);
            app.status(format!("Export error: {e}"));
            return;
        }
    };

    let include_headers = app.state.options.export.include_headers;
    let delim = app.state.options.export.format.delim();

    let status_msg = {
        let ds = app.cache.dataset(&name);
        if ds.is_empty() {
            logd!("Export: Clicked, but {:?} is empty", name);
            s!("Nothing to export")
        } else {
            let headers = if include_headers { ds.headers.clone() } else { None };
            logf!(
                "Export: Begin dataset={:?}, rows={}, headers={}",
                name,
                ds.row_count(),
                headers.as_ref().map(|h| h.len()).unwrap_or(0)
            );

            match file::write_table(&out_path, &headers, &ds.rows, delim) {
                Ok(path) => {
                    logf!("Export: OK → {}", path.display());
                    format!("Exported: {}", path.display())
                }
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }
    };

    // mutate app only after the dataset borrow is gone
    app.out_path_dirty = false;
    app.status(status_msg);
}
