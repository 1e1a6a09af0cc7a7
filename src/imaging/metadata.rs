//! Auxiliary PNG metadata carried from the source onto every output file.
//!
//! The pipeline treats [`PngMetadata`] as an opaque bag: it is read once from
//! the source header and handed to the encoder for each write. Only the
//! backend looks inside.
//!
//! | Key | Chunk |
//! |---|---|
//! | text keyword | `tEXt`, `zTXt`, `iTXt` |
//! | `icc_profile` | `iCCP` |
//! | `srgb` | `sRGB` |
//! | `gamma` | `gAMA` |
//! | `chromaticities` | `cHRM` |
//! | `physical_dimensions` | `pHYs` |
//!
//! Chunks that appear after the image data are not collected; only the
//! header up to the first `IDAT` is parsed.

use png::text_metadata::{ITXtChunk, TEXtChunk, ZTXtChunk};
use png::{PixelDimensions, ScaledFloat, SourceChromaticities, SrgbRenderingIntent};
use std::borrow::Cow;
use std::io::Read;

/// One metadata entry as found in the source.
#[derive(Debug, Clone)]
pub enum MetadataValue {
    Text(TEXtChunk),
    CompressedText(ZTXtChunk),
    InternationalText(ITXtChunk),
    IccProfile(Vec<u8>),
    Srgb(SrgbRenderingIntent),
    Gamma(ScaledFloat),
    Chromaticities(SourceChromaticities),
    PhysicalDimensions(PixelDimensions),
}

/// Ordered key→value bag of source metadata.
#[derive(Debug, Clone, Default)]
pub struct PngMetadata {
    entries: Vec<(String, MetadataValue)>,
}

impl PngMetadata {
    /// Read the metadata chunks from a PNG stream's header.
    pub fn read_from<R: Read>(reader: R) -> Result<Self, png::DecodingError> {
        let reader = png::Decoder::new(reader).read_info()?;
        Ok(Self::from_info(reader.info()))
    }

    /// Collect the metadata fields of an already parsed header.
    pub fn from_info(info: &png::Info<'_>) -> Self {
        let mut entries = Vec::new();

        if let Some(icc) = &info.icc_profile {
            entries.push((
                "icc_profile".to_string(),
                MetadataValue::IccProfile(icc.to_vec()),
            ));
        }
        if let Some(intent) = info.srgb {
            entries.push(("srgb".to_string(), MetadataValue::Srgb(intent)));
        }
        if let Some(gamma) = info.source_gamma {
            entries.push(("gamma".to_string(), MetadataValue::Gamma(gamma)));
        }
        if let Some(chrm) = info.source_chromaticities {
            entries.push((
                "chromaticities".to_string(),
                MetadataValue::Chromaticities(chrm),
            ));
        }
        if let Some(dims) = info.pixel_dims {
            entries.push((
                "physical_dimensions".to_string(),
                MetadataValue::PhysicalDimensions(dims),
            ));
        }
        for chunk in &info.uncompressed_latin1_text {
            entries.push((chunk.keyword.clone(), MetadataValue::Text(chunk.clone())));
        }
        for chunk in &info.compressed_latin1_text {
            entries.push((
                chunk.keyword.clone(),
                MetadataValue::CompressedText(chunk.clone()),
            ));
        }
        for chunk in &info.utf8_text {
            entries.push((
                chunk.keyword.clone(),
                MetadataValue::InternationalText(chunk.clone()),
            ));
        }

        Self { entries }
    }

    /// Copy every entry onto an encoder header.
    ///
    /// An embedded ICC profile wins over an `sRGB` intent: the two chunks
    /// are mutually exclusive in a valid PNG, so the intent is dropped.
    pub fn apply_to<'a>(&'a self, info: &mut png::Info<'a>) {
        let has_icc = self
            .entries
            .iter()
            .any(|(_, v)| matches!(v, MetadataValue::IccProfile(_)));

        for (_, value) in &self.entries {
            match value {
                MetadataValue::Text(chunk) => info.uncompressed_latin1_text.push(chunk.clone()),
                MetadataValue::CompressedText(chunk) => {
                    info.compressed_latin1_text.push(chunk.clone())
                }
                MetadataValue::InternationalText(chunk) => info.utf8_text.push(chunk.clone()),
                MetadataValue::IccProfile(bytes) => {
                    info.icc_profile = Some(Cow::Borrowed(bytes.as_slice()))
                }
                MetadataValue::Srgb(intent) if !has_icc => info.srgb = Some(*intent),
                MetadataValue::Srgb(_) => {}
                MetadataValue::Gamma(gamma) => info.source_gamma = Some(*gamma),
                MetadataValue::Chromaticities(chrm) => info.source_chromaticities = Some(*chrm),
                MetadataValue::PhysicalDimensions(dims) => info.pixel_dims = Some(*dims),
            }
        }
    }
}

#[cfg(test)]
impl PngMetadata {
    /// Entry keys in source order.
    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub(crate) fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }
}
