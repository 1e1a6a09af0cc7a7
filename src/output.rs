//! CLI output formatting.
//!
//! # Output Format
//!
//! ```text
//! Generated Mip 0: 512x512
//!     Tiles: 2x2 (4 files)
//! Generated Mip 1: 256x256
//! Generated Mip 2: 128x128
//! Generated Mip 3: 64x64
//! Generated Mip 4: 32x32
//! Generated 5 mip levels in: textures/rock_Mipmaps
//!     Tiles: 4 files across all levels
//! ```
//!
//! The output is informational, not a machine-readable contract.
//!
//! # Architecture
//!
//! Each message has a `format_*` function (returns `Vec<String>` or `String`)
//! for testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::pyramid::{LevelSummary, PyramidEvent, PyramidSummary};

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Header line for a level plus an indented tile line when it was tiled.
pub fn format_level(summary: &LevelSummary) -> Vec<String> {
    let mut lines = vec![format!(
        "Generated Mip {}: {}x{}",
        summary.level, summary.dimensions.width, summary.dimensions.height
    )];
    if let Some(grid) = &summary.tiles {
        lines.push(format!(
            "{}Tiles: {}x{} ({} files)",
            indent(1),
            grid.columns,
            grid.rows,
            grid.tile_count()
        ));
    }
    lines
}

pub fn format_pyramid_event(event: &PyramidEvent) -> Vec<String> {
    match event {
        PyramidEvent::LevelWritten(summary) => format_level(summary),
    }
}

/// Level count and output folder, plus the tile total when anything was tiled.
pub fn format_summary(summary: &PyramidSummary) -> Vec<String> {
    let mut lines = vec![format!(
        "Generated {} mip levels in: {}",
        summary.levels.len(),
        summary.output_dir.display()
    )];
    let tiles = summary.tile_count();
    if tiles > 0 {
        lines.push(format!("{}Tiles: {} files across all levels", indent(1), tiles));
    }
    lines
}

/// Message shown for problems caught before any work starts.
pub fn format_preflight_error(message: &dyn std::fmt::Display) -> String {
    format!("Error: {message}")
}

pub fn print_pyramid_event(event: &PyramidEvent) {
    for line in format_pyramid_event(event) {
        println!("{}", line);
    }
}

pub fn print_summary(summary: &PyramidSummary) {
    for line in format_summary(summary) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::{Dimensions, TileGrid};
    use crate::preflight::PreflightError;
    use std::path::PathBuf;

    fn level(level: u32, width: u32, height: u32, tile_size: u32) -> LevelSummary {
        let dimensions = Dimensions { width, height };
        LevelSummary {
            level,
            dimensions,
            tiles: TileGrid::for_level(dimensions, tile_size),
        }
    }

    #[test]
    fn untiled_level_is_one_line() {
        let lines = format_level(&level(3, 64, 64, 256));
        assert_eq!(lines, vec!["Generated Mip 3: 64x64"]);
    }

    #[test]
    fn tiled_level_adds_indented_grid_line() {
        let lines = format_pyramid_event(&PyramidEvent::LevelWritten(level(0, 350, 200, 100)));
        assert_eq!(
            lines,
            vec!["Generated Mip 0: 350x200", "    Tiles: 4x2 (8 files)"]
        );
    }

    #[test]
    fn summary_counts_levels() {
        let summary = PyramidSummary {
            output_dir: PathBuf::from("textures/rock_Mipmaps"),
            levels: vec![level(0, 512, 512, 256), level(1, 256, 256, 256)],
        };
        assert_eq!(
            format_summary(&summary),
            vec![
                "Generated 2 mip levels in: textures/rock_Mipmaps",
                "    Tiles: 4 files across all levels",
            ]
        );
    }

    #[test]
    fn summary_without_tiles_is_one_line() {
        let summary = PyramidSummary {
            output_dir: PathBuf::from("rock_Mipmaps"),
            levels: vec![level(0, 200, 100, 256)],
        };
        assert_eq!(
            format_summary(&summary),
            vec!["Generated 1 mip levels in: rock_Mipmaps"]
        );
    }

    #[test]
    fn preflight_error_prefixed() {
        let err = PreflightError::NotFound(PathBuf::from("rock.png"));
        assert_eq!(
            format_preflight_error(&err),
            "Error: Source file 'rock.png' not found"
        );
    }
}
