//! File helpers for wrapping documents in place.

use std::{fs, path::Path};

use crate::fill::{WrapOptions, fill};

/// Rewrite the file at `path` with its text wrapped per `opts`.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite(path: &Path, opts: &WrapOptions) -> std::io::Result<()> {
    let text = fs::read_to_string(path)?;
    fs::write(path, fill(&text, opts))
}
