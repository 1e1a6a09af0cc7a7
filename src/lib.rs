//! # Mip Tiler
//!
//! Offline preprocessing for streamed textures. One PNG goes in; a pyramid of
//! progressively halved copies comes out, with any level larger than a tile
//! cut into a grid of fixed-size tiles, so a runtime can load only the
//! resolution and region it needs.
//!
//! # Pipeline
//!
//! ```text
//! 1. Preflight  source path  →  ok / clean error     (exists, *.png)
//! 2. Decode     rock.png     →  raster + mode + metadata
//! 3. Mip chain  level n      →  level n+1            (Lanczos3, floor halving)
//! 4. Tiling     level n      →  tile_<n>_<col>_<row> (only when > tile_size)
//! 5. Write      every raster →  PNG in source mode, source metadata attached
//! ```
//!
//! Everything runs on one thread in a single pass. Paths are deterministic,
//! so a rerun overwrites the same files with byte-identical output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`pyramid`] | Drives the run: decode, walk the mip chain, write levels and tiles |
//! | [`imaging`] | Chain/grid math, the [`imaging::ImageBackend`] trait, PNG codec work |
//! | [`preflight`] | Source checks that run before anything is decoded or created |
//! | [`config`] | `min_mip_size` / `tile_size` defaults and validation |
//! | [`naming`] | Output folder and file names |
//! | [`output`] | CLI progress formatting |
//!
//! # Design Decisions
//!
//! ## Progressive Halving
//!
//! Level n+1 is resampled from level n, not from the original. Filtering
//! compounds the same way on every run, and only one level raster is alive
//! at a time.
//!
//! ## Strict Tiling Threshold
//!
//! A level is tiled only when a side is *strictly* larger than the tile size.
//! A 256×256 level with 256px tiles stays a single `mip_<n>.png`.
//!
//! ## No Rollback
//!
//! A failed decode or write aborts the run. Files already written are left in
//! place; a rerun overwrites them.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod preflight;
pub mod pyramid;

#[cfg(test)]
pub(crate) mod test_helpers;
