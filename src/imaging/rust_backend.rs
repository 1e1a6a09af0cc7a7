//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode PNG | `image::ImageReader` (limits lifted for huge textures) |
//! | Read metadata | `png::Decoder::read_info` via [`PngMetadata`] |
//! | Downsample | `image::DynamicImage::resize_exact` with `Lanczos3`; alpha modes go through premultiplied `Rgba32F` |
//! | Encode PNG | `png::Encoder::with_info`, so metadata chunks survive |

use super::backend::{BackendError, ImageBackend, SourceImage, SourceProperties};
use super::metadata::PngMetadata;
use image::imageops::{self, FilterType};
use image::{ColorType, DynamicImage, ImageFormat, ImageReader};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Pure Rust backend using the `image` and `png` crates.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode a PNG from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    let mut reader = ImageReader::open(path).map_err(BackendError::Io)?;
    reader.set_format(ImageFormat::Png);
    reader.no_limits();
    reader.decode().map_err(|e| {
        BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
    })
}

fn load_metadata(path: &Path) -> Result<PngMetadata, BackendError> {
    let file = File::open(path).map_err(BackendError::Io)?;
    PngMetadata::read_from(BufReader::new(file)).map_err(|e| {
        BackendError::ProcessingFailed(format!(
            "Failed to read PNG header {}: {}",
            path.display(),
            e
        ))
    })
}

/// Convert `image` to `color` unless it already matches.
fn conform_color(
    image: &DynamicImage,
    color: ColorType,
) -> Result<Cow<'_, DynamicImage>, BackendError> {
    if image.color() == color {
        return Ok(Cow::Borrowed(image));
    }
    let converted = match color {
        ColorType::L8 => DynamicImage::ImageLuma8(image.to_luma8()),
        ColorType::La8 => DynamicImage::ImageLumaA8(image.to_luma_alpha8()),
        ColorType::Rgb8 => DynamicImage::ImageRgb8(image.to_rgb8()),
        ColorType::Rgba8 => DynamicImage::ImageRgba8(image.to_rgba8()),
        ColorType::L16 => DynamicImage::ImageLuma16(image.to_luma16()),
        ColorType::La16 => DynamicImage::ImageLumaA16(image.to_luma_alpha16()),
        ColorType::Rgb16 => DynamicImage::ImageRgb16(image.to_rgb16()),
        ColorType::Rgba16 => DynamicImage::ImageRgba16(image.to_rgba16()),
        other => return Err(BackendError::UnsupportedColor(other)),
    };
    Ok(Cow::Owned(converted))
}

/// Lanczos3 resize of an alpha-carrying image with color weighted by alpha.
///
/// Fully transparent texels contribute nothing to the color of their
/// neighbours. The result has the same color type as `image`.
fn resize_premultiplied(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let mut straight = image.to_rgba32f();
    for pixel in straight.pixels_mut() {
        let alpha = pixel[3];
        for channel in &mut pixel.0[..3] {
            *channel *= alpha;
        }
    }

    let mut resized = imageops::resize(&straight, width, height, FilterType::Lanczos3);
    for pixel in resized.pixels_mut() {
        let alpha = pixel[3].clamp(0.0, 1.0);
        pixel[3] = alpha;
        for channel in &mut pixel.0[..3] {
            *channel = if alpha > 0.0 {
                (*channel / alpha).clamp(0.0, 1.0)
            } else {
                0.0
            };
        }
    }

    let resized = DynamicImage::ImageRgba32F(resized);
    match image.color() {
        ColorType::La8 => DynamicImage::ImageLumaA8(resized.to_luma_alpha8()),
        ColorType::La16 => DynamicImage::ImageLumaA16(resized.to_luma_alpha16()),
        ColorType::Rgba16 => DynamicImage::ImageRgba16(resized.to_rgba16()),
        ColorType::Rgba32F => resized,
        _ => DynamicImage::ImageRgba8(resized.to_rgba8()),
    }
}

/// PNG header color type and bit depth for a decoded color type.
fn png_layout(color: ColorType) -> Result<(png::ColorType, png::BitDepth), BackendError> {
    use png::{BitDepth, ColorType as Png};
    let layout = match color {
        ColorType::L8 => (Png::Grayscale, BitDepth::Eight),
        ColorType::La8 => (Png::GrayscaleAlpha, BitDepth::Eight),
        ColorType::Rgb8 => (Png::Rgb, BitDepth::Eight),
        ColorType::Rgba8 => (Png::Rgba, BitDepth::Eight),
        ColorType::L16 => (Png::Grayscale, BitDepth::Sixteen),
        ColorType::La16 => (Png::GrayscaleAlpha, BitDepth::Sixteen),
        ColorType::Rgb16 => (Png::Rgb, BitDepth::Sixteen),
        ColorType::Rgba16 => (Png::Rgba, BitDepth::Sixteen),
        other => return Err(BackendError::UnsupportedColor(other)),
    };
    Ok(layout)
}

/// Raw sample bytes in PNG order. 16-bit samples are big-endian on disk.
fn png_samples(image: &DynamicImage, depth: png::BitDepth) -> Cow<'_, [u8]> {
    let bytes = image.as_bytes();
    match depth {
        png::BitDepth::Sixteen => Cow::Owned(
            bytes
                .chunks_exact(2)
                .flat_map(|pair| u16::from_ne_bytes([pair[0], pair[1]]).to_be_bytes())
                .collect(),
        ),
        _ => Cow::Borrowed(bytes),
    }
}

/// Encode and save as PNG with the source's metadata attached.
fn save_png(
    image: &DynamicImage,
    path: &Path,
    source: &SourceProperties,
) -> Result<(), BackendError> {
    let image = conform_color(image, source.color)?;
    let (color_type, bit_depth) = png_layout(image.color())?;

    let mut info = png::Info::with_size(image.width(), image.height());
    info.color_type = color_type;
    info.bit_depth = bit_depth;
    source.metadata.apply_to(&mut info);

    let file = File::create(path).map_err(BackendError::Io)?;
    let encoder = png::Encoder::with_info(BufWriter::new(file), info)?;
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&png_samples(&image, bit_depth))?;
    writer.finish()?;
    Ok(())
}

impl ImageBackend for RustBackend {
    fn open(&self, path: &Path) -> Result<SourceImage, BackendError> {
        let pixels = load_image(path)?;
        let metadata = load_metadata(path)?;
        Ok(SourceImage {
            properties: SourceProperties {
                color: pixels.color(),
                metadata,
            },
            pixels,
        })
    }

    fn downsample(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        if image.color().has_alpha() {
            resize_premultiplied(image, width, height)
        } else {
            image.resize_exact(width, height, FilterType::Lanczos3)
        }
    }

    fn write_png(
        &self,
        image: &DynamicImage,
        path: &Path,
        source: &SourceProperties,
    ) -> Result<(), BackendError> {
        save_png(image, path, source)
    }
}
