//! Extraction dispatch — one entry point for both strategies.
//!
//! The source stream is rewound before every read attempt: one
//! pipeline run may read the same upload more than once, and the
//! caller's cursor position is not part of the contract.

use std::io::{Read, Seek, SeekFrom};

use tracing::{debug, info};

use super::ocr::MockOcrEngine;
use super::pdf::extract_pdf_text;
use super::preprocess::prepare_for_ocr;
use super::types::{OcrEngine, SourceKind, NO_TEXT_IMAGE};
use super::ExtractionError;

/// Text extractor with a pluggable OCR backend.
pub struct TextExtractor {
    ocr: Option<Box<dyn OcrEngine>>,
}

impl TextExtractor {
    /// Extractor with the default OCR backend.
    ///
    /// With the `ocr` feature that is system Tesseract; without it,
    /// raster files fail with [`ExtractionError::OcrUnavailable`]
    /// while PDFs keep working.
    pub fn new() -> Self {
        #[cfg(feature = "ocr")]
        {
            Self {
                ocr: Some(Box::new(super::ocr::TesseractOcr::new())),
            }
        }
        #[cfg(not(feature = "ocr"))]
        {
            Self { ocr: None }
        }
    }

    /// Extractor with a caller-supplied OCR engine.
    pub fn with_engine(engine: Box<dyn OcrEngine>) -> Self {
        Self { ocr: Some(engine) }
    }

    /// Extractor that rejects raster files outright.
    pub fn without_ocr() -> Self {
        Self { ocr: None }
    }

    /// Extractor backed by a mock engine (test helper).
    pub fn with_mock_ocr(text: &str) -> Self {
        Self::with_engine(Box::new(MockOcrEngine::reading(text)))
    }

    /// Extract plain text from the file according to its declared type.
    ///
    /// Returns trimmed text; "nothing found" comes back as one of the
    /// extraction sentinels, never as an error.
    pub fn extract<R: Read + Seek>(
        &self,
        file: &mut R,
        kind: SourceKind,
    ) -> Result<String, ExtractionError> {
        // Reset read position — the stream may have been read before.
        file.seek(SeekFrom::Start(0))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;

        debug!(kind = %kind, size = bytes.len(), "extracting text");

        let text = match kind {
            SourceKind::Pdf => extract_pdf_text(&bytes)?,
            raster => {
                debug_assert!(raster.is_raster());
                self.extract_image_text(&bytes)?
            }
        };

        info!(kind = %kind, chars = text.len(), "extraction complete");
        Ok(text)
    }

    fn extract_image_text(&self, image_bytes: &[u8]) -> Result<String, ExtractionError> {
        let engine = self.ocr.as_ref().ok_or(ExtractionError::OcrUnavailable)?;

        let png = prepare_for_ocr(image_bytes)?;
        let text = engine.ocr_image(&png)?;
        let trimmed = text.trim();

        if trimmed.is_empty() {
            Ok(NO_TEXT_IMAGE.to_string())
        } else {
            Ok(trimmed.to_string())
        }
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}
