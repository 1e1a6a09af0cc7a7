//! Run configuration for pyramid generation.
//!
//! There is no config file: both knobs come from the command line and fall
//! back to the stock defaults below.
//!
//! | Option | Default | Meaning |
//! |---|---|---|
//! | `min_mip_size` | 32 | Smallest width/height a generated level may have |
//! | `tile_size` | 256 | Edge length of a tile; larger levels get split |

use thiserror::Error;

pub const DEFAULT_MIN_MIP_SIZE: u32 = 32;
pub const DEFAULT_TILE_SIZE: u32 = 256;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Knobs controlling the mip chain and the tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MipmapConfig {
    /// The chain stops before any level whose width or height would drop below this.
    pub min_mip_size: u32,
    /// Levels wider or taller than this are split into tiles of this edge length.
    pub tile_size: u32,
}

impl Default for MipmapConfig {
    fn default() -> Self {
        Self {
            min_mip_size: DEFAULT_MIN_MIP_SIZE,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl MipmapConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Halving never goes below zero, so a zero floor would loop forever.
        if self.min_mip_size == 0 {
            return Err(ConfigError::Validation(
                "min-mip-size must be at least 1".into(),
            ));
        }
        if self.tile_size == 0 {
            return Err(ConfigError::Validation(
                "tile-size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
