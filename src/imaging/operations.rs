//! High-level image operations.
//!
//! These functions combine calculations with backend execution: they decide
//! file names and crop regions, then hand each raster to the backend.

use super::backend::{BackendError, ImageBackend, SourceProperties};
use super::calculations::TileGrid;
use crate::naming::{mip_file_name, tile_file_name};
use image::DynamicImage;
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Write a level's full raster as `mip_<level>.png` inside `level_dir`.
pub fn write_mip_level(
    backend: &impl ImageBackend,
    level_image: &DynamicImage,
    level_dir: &Path,
    level: u32,
    source: &SourceProperties,
) -> Result<()> {
    backend.write_png(level_image, &level_dir.join(mip_file_name(level)), source)
}

/// Crop every cell of `grid` out of `level_image` and write it as
/// `tile_<level>_<col>_<row>.png` inside `level_dir`.
///
/// Stops at the first failed write; tiles already written stay on disk.
/// Returns the number of tiles written.
pub fn write_tiles(
    backend: &impl ImageBackend,
    level_image: &DynamicImage,
    level_dir: &Path,
    level: u32,
    grid: &TileGrid,
    source: &SourceProperties,
) -> Result<u32> {
    let mut written = 0;
    for tile in grid.tiles() {
        let crop = level_image.crop_imm(tile.x, tile.y, tile.width, tile.height);
        let path = level_dir.join(tile_file_name(level, tile.column, tile.row));
        backend.write_png(&crop, &path, source)?;
        written += 1;
    }
    Ok(written)
}
