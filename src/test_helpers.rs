//! Shared test utilities: synthetic PNG fixtures.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! let path = tmp.path().join("rock.png");
//! write_png_with_text(&path, &gradient_rgba(64, 32), &[("Author", "me")]);
//! ```

use image::{Rgba, RgbaImage};
use std::path::Path;

/// Deterministic RGBA gradient with a varying alpha channel.
pub fn gradient_rgba(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 7 % 256) as u8,
            (y * 13 % 256) as u8,
            ((x + y) % 256) as u8,
            (255 - (x % 64)) as u8,
        ])
    })
}

/// Encode an RGBA PNG in memory with the given `tEXt` entries ahead of the image data.
pub fn png_bytes_with_text(width: u32, height: u32, text: &[(&str, &str)]) -> Vec<u8> {
    encode_rgba(&gradient_rgba(width, height), text)
}

/// Write an RGBA PNG with `tEXt` entries to `path`.
pub fn write_png_with_text(path: &Path, image: &RgbaImage, text: &[(&str, &str)]) {
    std::fs::write(path, encode_rgba(image, text)).unwrap();
}

fn encode_rgba(image: &RgbaImage, text: &[(&str, &str)]) -> Vec<u8> {
    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        for (keyword, value) in text {
            encoder
                .add_text_chunk(keyword.to_string(), value.to_string())
                .unwrap();
        }
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(image.as_raw()).unwrap();
        writer.finish().unwrap();
    }
    bytes
}
