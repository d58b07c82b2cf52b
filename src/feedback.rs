// src/feedback.rs
// Append-only feedback log: one line per submission, created on first use.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Append one comment to the feedback file.
/// Embedded newlines are flattened so each submission stays a single line.
pub fn append(path: &Path, comment: &str) -> io::Result<()> {
    let line = comment.replace(['\r', '\n'], " ");

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    writeln!(file, "{}", line.trim())?;
    Ok(())
}
