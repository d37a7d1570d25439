use serde::{Deserialize, Serialize};

use super::ExtractionError;

/// Fixed sentinel returned when a PDF parses cleanly but carries no
/// text layer. Data, not an error — the pipeline's validation gate
/// decides what to do with it.
pub const NO_TEXT_PDF: &str = "No text could be extracted from the PDF";

/// Fixed sentinel returned when OCR completes but reads nothing.
pub const NO_TEXT_IMAGE: &str = "No text could be extracted from the image";

/// Is this one of the extraction sentinels?
pub fn is_extraction_sentinel(text: &str) -> bool {
    text == NO_TEXT_PDF || text == NO_TEXT_IMAGE
}

/// Declared file type, derived from the upload's filename extension.
///
/// The extension is trusted as-is — content is never sniffed. A
/// mismatched extension surfaces as a decode error downstream, not
/// silent corruption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Pdf,
    Jpg,
    Jpeg,
    Png,
    Tiff,
    Bmp,
}

impl SourceKind {
    /// Parse a filename extension, case-insensitively.
    ///
    /// Returns `None` for anything outside the supported set, so the
    /// caller can reject the file before any I/O happens.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim().to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "jpg" => Some(Self::Jpg),
            "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "tiff" => Some(Self::Tiff),
            "bmp" => Some(Self::Bmp),
            _ => None,
        }
    }

    /// True for the raster formats that go through OCR.
    pub fn is_raster(&self) -> bool {
        !matches!(self, Self::Pdf)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Tiff => "tiff",
            Self::Bmp => "bmp",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// OCR engine abstraction (allows mocking for tests).
///
/// Input is an encoded PNG of an RGB page image; output is whatever
/// text the engine reads, untrimmed.
pub trait OcrEngine {
    fn ocr_image(&self, png_bytes: &[u8]) -> Result<String, ExtractionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_parsing_is_case_insensitive() {
        assert_eq!(SourceKind::from_extension("PDF"), Some(SourceKind::Pdf));
        assert_eq!(SourceKind::from_extension("JpEg"), Some(SourceKind::Jpeg));
        assert_eq!(SourceKind::from_extension(" png "), Some(SourceKind::Png));
    }

    #[test]
    fn unsupported_extensions_rejected() {
        assert_eq!(SourceKind::from_extension("docx"), None);
        assert_eq!(SourceKind::from_extension("txt"), None);
        assert_eq!(SourceKind::from_extension(""), None);
    }

    #[test]
    fn pdf_is_not_raster() {
        assert!(!SourceKind::Pdf.is_raster());
        assert!(SourceKind::Jpg.is_raster());
        assert!(SourceKind::Tiff.is_raster());
    }

    #[test]
    fn sentinels_are_recognized() {
        assert!(is_extraction_sentinel(NO_TEXT_PDF));
        assert!(is_extraction_sentinel(NO_TEXT_IMAGE));
        assert!(!is_extraction_sentinel("Glucose: 150 mg/dL"));
        assert!(!is_extraction_sentinel(""));
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&SourceKind::Jpeg).unwrap();
        assert_eq!(json, "\"jpeg\"");
    }

    #[test]
    fn kind_display() {
        assert_eq!(SourceKind::Pdf.to_string(), "pdf");
        assert_eq!(SourceKind::Tiff.to_string(), "tiff");
    }
}
