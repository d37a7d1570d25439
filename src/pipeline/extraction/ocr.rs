//! OCR backends.
//!
//! The real engine is system Tesseract, linked only when the crate is
//! built with the `ocr` feature so that default builds (and CI) need
//! no native OCR installation. Tests run against [`MockOcrEngine`].

use super::types::OcrEngine;
use super::ExtractionError;

/// System Tesseract, configured for medical report pages.
///
/// Page-segmentation mode 6 treats the page as a single uniform block
/// of text, which suits printed lab slips and report printouts.
#[cfg(feature = "ocr")]
pub struct TesseractOcr {
    lang: String,
}

#[cfg(feature = "ocr")]
impl TesseractOcr {
    pub fn new() -> Self {
        Self {
            lang: "eng".to_string(),
        }
    }

    /// Set the recognition language(s), e.g. "eng" or "eng+fra".
    pub fn with_languages(mut self, langs: &str) -> Self {
        self.lang = langs.to_string();
        self
    }
}

#[cfg(feature = "ocr")]
impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "ocr")]
impl OcrEngine for TesseractOcr {
    fn ocr_image(&self, png_bytes: &[u8]) -> Result<String, ExtractionError> {
        let tess = tesseract::Tesseract::new(None, Some(self.lang.as_str()))
            .map_err(|e| ExtractionError::OcrProcessing(format!("{e:?}")))?;

        // Single uniform block of text
        let tess = tess
            .set_variable("tessedit_pageseg_mode", "6")
            .map_err(|e| ExtractionError::OcrProcessing(format!("{e:?}")))?;

        let mut tess = tess
            .set_image_from_mem(png_bytes)
            .map_err(|e| ExtractionError::OcrProcessing(format!("{e:?}")))?;

        tess.get_text()
            .map_err(|e| ExtractionError::OcrProcessing(format!("{e:?}")))
    }
}

/// Mock OCR engine for tests — returns a fixed string, or a fixed
/// failure, without touching Tesseract.
pub struct MockOcrEngine {
    text: Option<String>,
}

impl MockOcrEngine {
    /// Engine that "reads" the given text from any image.
    pub fn reading(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }

    /// Engine that fails every recognition attempt.
    pub fn failing() -> Self {
        Self { text: None }
    }
}

impl OcrEngine for MockOcrEngine {
    fn ocr_image(&self, _png_bytes: &[u8]) -> Result<String, ExtractionError> {
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => Err(ExtractionError::OcrProcessing("mock failure".into())),
        }
    }
}
