// src/gui/actions/feedback.rs
use std::path::Path;

use crate::{config::consts::FEEDBACK_FILE, feedback, gui::app::App};

pub fn submit(app: &mut App) {
    let comment = app.state.gui.comment_text.trim().to_string();
    if comment.is_empty() {
        logd!("Feedback: Submit clicked with empty comment");
        app.status("Nothing to submit");
        return;
    }

    let rating = app.state.gui.rating;

    match feedback::append(Path::new(FEEDBACK_FILE), &comment) {
        Ok(()) => {
            logf!("Feedback: Recorded ({} stars, {} chars)", rating, comment.len());
            app.state.gui.comment_text.clear();
            app.status("Thank you for your feedback!");
        }
        Err(e) => {
            loge!("Feedback: Write failed: {}", e);
            app.status(format!("Could not save feedback: {e}"));
        }
    }
}
