//! Source checks that run before any decoding or directory creation.
//!
//! A failure here is a user mistake, not a crash: the CLI prints the message
//! and exits normally without touching the filesystem.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PreflightError {
    #[error("Source file '{}' not found", .0.display())]
    NotFound(PathBuf),
    #[error("Source must be a PNG file: '{}'", .0.display())]
    NotPng(PathBuf),
}

/// Verify the source exists and carries a `.png` extension (any case).
///
/// Existence is checked first, so a missing `photo.jpg` reports "not found".
pub fn check_source(path: &Path) -> Result<(), PreflightError> {
    if !path.exists() {
        return Err(PreflightError::NotFound(path.to_path_buf()));
    }
    if !has_png_extension(path) {
        return Err(PreflightError::NotPng(path.to_path_buf()));
    }
    Ok(())
}

/// Suffix match on the whole name, so a bare `.png` file also qualifies.
fn has_png_extension(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().ends_with(".png")
}
