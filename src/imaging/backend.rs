//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the three operations the pipeline
//! needs: open (decode + metadata), downsample, and write_png.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! and `png` crates. Tests substitute a mock that records operations.

use super::metadata::PngMetadata;
use image::{ColorType, DynamicImage};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
    #[error("PNG encode failed: {0}")]
    Encode(#[from] png::EncodingError),
    #[error("Color type {0:?} cannot be written as PNG")]
    UnsupportedColor(ColorType),
}

/// Width and height of a raster in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn of(image: &DynamicImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }
}

/// What every output file inherits from the source.
#[derive(Debug, Clone)]
pub struct SourceProperties {
    /// Channel layout and bit depth of the decoded source.
    pub color: ColorType,
    pub metadata: PngMetadata,
}

/// A decoded source texture.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub pixels: DynamicImage,
    pub properties: SourceProperties,
}

impl SourceImage {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::of(&self.pixels)
    }
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Decode a PNG file along with its color mode and metadata.
    fn open(&self, path: &Path) -> Result<SourceImage, BackendError>;

    /// Resample `image` to exactly `width` x `height` with an anti-aliased filter.
    fn downsample(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage;

    /// Encode `image` as PNG at `path` in the source's color mode, carrying
    /// the source's metadata.
    fn write_png(
        &self,
        image: &DynamicImage,
        path: &Path,
        source: &SourceProperties,
    ) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Mock backend that records operations without touching pixels or disk.
    ///
    /// `open` hands out a blank image of the configured size; `downsample`
    /// returns a blank image of the requested size so dimensions still flow
    /// through the pipeline.
    pub struct MockBackend {
        pub source: Dimensions,
        pub color: ColorType,
        /// Fail the write whose path ends with this file name.
        pub fail_on: Option<String>,
        pub operations: RefCell<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Open(String),
        Downsample {
            from: Dimensions,
            to: Dimensions,
        },
        Write {
            path: String,
            width: u32,
            height: u32,
        },
    }

    impl MockBackend {
        pub fn with_source(width: u32, height: u32) -> Self {
            Self {
                source: Dimensions { width, height },
                color: ColorType::Rgba8,
                fail_on: None,
                operations: RefCell::new(Vec::new()),
            }
        }

        pub fn failing_on(mut self, file_name: &str) -> Self {
            self.fail_on = Some(file_name.to_string());
            self
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.borrow().clone()
        }

        /// Recorded writes as (file name, width, height).
        pub fn writes(&self) -> Vec<(String, u32, u32)> {
            self.operations
                .borrow()
                .iter()
                .filter_map(|op| match op {
                    RecordedOp::Write {
                        path,
                        width,
                        height,
                    } => {
                        let name = Path::new(path)
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_default();
                        Some((name, *width, *height))
                    }
                    _ => None,
                })
                .collect()
        }
    }

    impl ImageBackend for MockBackend {
        fn open(&self, path: &Path) -> Result<SourceImage, BackendError> {
            self.operations
                .borrow_mut()
                .push(RecordedOp::Open(path.to_string_lossy().to_string()));
            Ok(SourceImage {
                pixels: DynamicImage::new(self.source.width, self.source.height, self.color),
                properties: SourceProperties {
                    color: self.color,
                    metadata: PngMetadata::default(),
                },
            })
        }

        fn downsample(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
            self.operations.borrow_mut().push(RecordedOp::Downsample {
                from: Dimensions::of(image),
                to: Dimensions { width, height },
            });
            DynamicImage::new(width, height, image.color())
        }

        fn write_png(
            &self,
            image: &DynamicImage,
            path: &Path,
            _source: &SourceProperties,
        ) -> Result<(), BackendError> {
            self.operations.borrow_mut().push(RecordedOp::Write {
                path: path.to_string_lossy().to_string(),
                width: image.width(),
                height: image.height(),
            });
            if self
                .fail_on
                .as_deref()
                .is_some_and(|name| path.ends_with(name))
            {
                return Err(BackendError::ProcessingFailed(format!(
                    "mock write failure: {}",
                    path.display()
                )));
            }
            Ok(())
        }
    }

    #[test]
    fn mock_records_open() {
        let backend = MockBackend::with_source(800, 600);

        let source = backend.open(Path::new("/test/rock.png")).unwrap();
        assert_eq!(
            source.dimensions(),
            Dimensions {
                width: 800,
                height: 600
            }
        );

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Open(p) if p == "/test/rock.png"));
    }

    #[test]
    fn mock_downsample_returns_requested_size() {
        let backend = MockBackend::with_source(64, 64);
        let source = backend.open(Path::new("a.png")).unwrap();

        let half = backend.downsample(&source.pixels, 32, 32);
        assert_eq!((half.width(), half.height()), (32, 32));
        assert_eq!(half.color(), ColorType::Rgba8);
    }

    #[test]
    fn mock_fails_on_configured_file() {
        let backend = MockBackend::with_source(8, 8).failing_on("tile_0_1_0.png");
        let source = backend.open(Path::new("a.png")).unwrap();

        assert!(
            backend
                .write_png(&source.pixels, Path::new("/out/tile_0_0_0.png"), &source.properties)
                .is_ok()
        );
        assert!(
            backend
                .write_png(&source.pixels, Path::new("/out/tile_0_1_0.png"), &source.properties)
                .is_err()
        );
        assert_eq!(backend.writes().len(), 2);
    }
}
