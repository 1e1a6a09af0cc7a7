//! Image processing — pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (PNG only) |
//! | **Metadata** | `png` header chunks, see [`PngMetadata`] |
//! | **Downsample** | Lanczos3 `resize_exact` |
//! | **Tile crop** | `DynamicImage::crop_imm` |
//! | **Encode** | `png::Encoder` with the source's metadata |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for mip chain and tile grid math (unit testable)
//! - **Metadata**: The opaque source metadata bag
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: Level and tile writes combining calculations + backend

pub mod backend;
mod calculations;
pub mod metadata;
pub mod operations;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend, SourceImage, SourceProperties};
pub use calculations::{
    TileGrid, TileRegion, calculate_mip_chain, needs_tiling, next_mip_dimensions,
};
pub use metadata::{MetadataValue, PngMetadata};
pub use operations::{write_mip_level, write_tiles};
pub use rust_backend::RustBackend;
