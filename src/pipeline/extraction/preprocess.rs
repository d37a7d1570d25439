//! Raster image conditioning ahead of OCR.
//!
//! OCR engines perform more reliably on plain three-channel color
//! input, so anything else (grayscale, palettes, alpha channels) is
//! converted to 8-bit RGB before recognition. The conditioned page is
//! handed to the engine as an encoded PNG.

use std::io::Cursor;

use image::{ColorType, DynamicImage, ImageFormat};
use tracing::debug;

use super::ExtractionError;

/// Decode an uploaded raster image and normalize it for OCR.
///
/// Accepts whatever the `image` crate can decode from the bytes
/// (JPEG, PNG, TIFF, BMP in this build) and returns PNG-encoded
/// 8-bit RGB pixels.
pub fn prepare_for_ocr(image_bytes: &[u8]) -> Result<Vec<u8>, ExtractionError> {
    let decoded = image::load_from_memory(image_bytes)
        .map_err(|e| ExtractionError::ImageDecoding(e.to_string()))?;

    let rgb = match decoded.color() {
        ColorType::Rgb8 => decoded,
        other => {
            debug!(color = ?other, "converting image to RGB for OCR");
            DynamicImage::ImageRgb8(decoded.to_rgb8())
        }
    };

    let mut png = Cursor::new(Vec::new());
    rgb.write_to(&mut png, ImageFormat::Png)
        .map_err(|e| ExtractionError::ImageDecoding(e.to_string()))?;

    Ok(png.into_inner())
}
