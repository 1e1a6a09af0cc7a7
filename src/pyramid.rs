//! Mip pyramid generation.
//!
//! Decodes one PNG, walks the mip chain from full resolution down to the
//! configured floor, and writes every level (plus its tiles, when the level
//! is larger than a tile) into the output tree.
//!
//! ## Output Structure
//!
//! ```text
//! rock_Mipmaps/
//! ├── Mip_0/
//! │   ├── mip_0.png          # full level
//! │   ├── tile_0_0_0.png     # only when the level exceeds tile_size
//! │   ├── tile_0_1_0.png
//! │   ├── tile_0_0_1.png
//! │   └── tile_0_1_1.png
//! ├── Mip_1/
//! │   └── mip_1.png
//! └── ...
//! ```
//!
//! ## Progressive Halving
//!
//! Each level is resampled from the level before it, never from the
//! original. Only the current level's raster is kept in memory.
//!
//! ## Failure
//!
//! The first decode or write error aborts the run. Directories and files
//! already written are left in place.

use crate::config::{ConfigError, MipmapConfig};
use crate::imaging::{
    BackendError, Dimensions, ImageBackend, RustBackend, SourceImage, TileGrid,
    calculate_mip_chain, write_mip_level, write_tiles,
};
use crate::naming::{level_dir, mipmaps_dir};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PyramidError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// What was written for one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSummary {
    pub level: u32,
    pub dimensions: Dimensions,
    /// Tile layout, or `None` when the level was small enough to stay whole.
    pub tiles: Option<TileGrid>,
}

/// Progress reported while the pyramid is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PyramidEvent {
    /// A level's full raster and all of its tiles are on disk.
    LevelWritten(LevelSummary),
}

/// Result of a complete run.
#[derive(Debug, Clone)]
pub struct PyramidSummary {
    /// The `<stem>_Mipmaps` folder.
    pub output_dir: PathBuf,
    pub levels: Vec<LevelSummary>,
}

impl PyramidSummary {
    /// Tiles written across every level.
    pub fn tile_count(&self) -> u32 {
        self.levels
            .iter()
            .filter_map(|l| l.tiles.as_ref())
            .map(TileGrid::tile_count)
            .sum()
    }
}

pub fn generate_pyramid(
    source_path: &Path,
    config: &MipmapConfig,
    on_event: impl FnMut(&PyramidEvent),
) -> Result<PyramidSummary, PyramidError> {
    let backend = RustBackend::new();
    generate_with_backend(&backend, source_path, config, on_event)
}

/// Generate the pyramid using a specific backend (allows testing with mock).
pub fn generate_with_backend(
    backend: &impl ImageBackend,
    source_path: &Path,
    config: &MipmapConfig,
    mut on_event: impl FnMut(&PyramidEvent),
) -> Result<PyramidSummary, PyramidError> {
    config.validate()?;

    let source = backend.open(source_path)?;
    let chain = calculate_mip_chain(source.dimensions(), config.min_mip_size);
    let SourceImage { pixels, properties } = source;

    let output_dir = mipmaps_dir(source_path);
    std::fs::create_dir_all(&output_dir)?;

    let mut current = pixels;
    let mut levels = Vec::with_capacity(chain.len());

    for (level, dims) in (0u32..).zip(chain) {
        if level > 0 {
            current = backend.downsample(&current, dims.width, dims.height);
        }

        let dir = level_dir(&output_dir, level);
        std::fs::create_dir_all(&dir)?;
        write_mip_level(backend, &current, &dir, level, &properties)?;

        let tiles = TileGrid::for_level(dims, config.tile_size);
        if let Some(grid) = &tiles {
            write_tiles(backend, &current, &dir, level, grid, &properties)?;
        }

        let summary = LevelSummary {
            level,
            dimensions: dims,
            tiles,
        };
        on_event(&PyramidEvent::LevelWritten(summary.clone()));
        levels.push(summary);
    }

    Ok(PyramidSummary { output_dir, levels })
}
