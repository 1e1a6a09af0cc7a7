//! Pure calculation functions for the mip chain and the tile grid.
//!
//! All functions here are pure and testable without any I/O or images.

use super::backend::Dimensions;

/// Calculate the dimensions of every level in the mip chain.
///
/// Level 0 is always the original size. Each following level halves the
/// previous one with floor division, and the chain stops before the first
/// level whose width or height would drop below `min_mip_size`.
///
/// `min_mip_size` must be at least 1 or the chain never terminates; the
/// config layer guarantees this.
///
/// # Examples
/// ```
/// # use mip_tiler::imaging::{Dimensions, calculate_mip_chain};
/// let chain = calculate_mip_chain(Dimensions { width: 100, height: 64 }, 32);
/// assert_eq!(chain.len(), 2); // 100x64, 50x32
/// ```
pub fn calculate_mip_chain(original: Dimensions, min_mip_size: u32) -> Vec<Dimensions> {
    let mut chain = vec![original];
    let mut current = original;

    while let Some(next) = next_mip_dimensions(current, min_mip_size) {
        chain.push(next);
        current = next;
    }

    chain
}

/// Halve `current`, or `None` if either side of the result would be below the floor.
pub fn next_mip_dimensions(current: Dimensions, min_mip_size: u32) -> Option<Dimensions> {
    let next = Dimensions {
        width: current.width / 2,
        height: current.height / 2,
    };
    (next.width >= min_mip_size && next.height >= min_mip_size).then_some(next)
}

/// Whether a level is large enough to be split into tiles.
///
/// Strictly greater: a level exactly `tile_size` wide stays whole.
pub fn needs_tiling(dims: Dimensions, tile_size: u32) -> bool {
    dims.width > tile_size || dims.height > tile_size
}

/// A rectangular crop of a level, addressed by grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRegion {
    pub column: u32,
    pub row: u32,
    /// Left edge in level pixels.
    pub x: u32,
    /// Top edge in level pixels.
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Grid layout for one tiled level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    pub columns: u32,
    pub rows: u32,
    pub tile_size: u32,
    level: Dimensions,
}

impl TileGrid {
    /// Grid for a level, or `None` when the level fits in a single tile.
    pub fn for_level(level: Dimensions, tile_size: u32) -> Option<Self> {
        if !needs_tiling(level, tile_size) {
            return None;
        }
        Some(Self {
            columns: level.width.div_ceil(tile_size),
            rows: level.height.div_ceil(tile_size),
            tile_size,
            level,
        })
    }

    pub fn tile_count(&self) -> u32 {
        self.columns * self.rows
    }

    /// Region of a single cell, with the far edges clamped to the level bounds.
    pub fn region(&self, column: u32, row: u32) -> TileRegion {
        let x = column * self.tile_size;
        let y = row * self.tile_size;
        let right = (x + self.tile_size).min(self.level.width);
        let bottom = (y + self.tile_size).min(self.level.height);
        TileRegion {
            column,
            row,
            x,
            y,
            width: right - x,
            height: bottom - y,
        }
    }

    /// All cells in row-major order (rows outer, columns inner).
    pub fn tiles(&self) -> impl Iterator<Item = TileRegion> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.columns).map(move |column| self.region(column, row)))
    }
}
