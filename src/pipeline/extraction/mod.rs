//! Text extraction — the first stage of the report pipeline.
//!
//! Two strategies, selected by the declared file type: direct
//! text-layer extraction for PDFs and Tesseract OCR for raster
//! images. Both converge on a single trimmed string; "nothing found"
//! is reported through fixed sentinel values, never as an error.

pub mod types;
pub mod pdf;
pub mod preprocess;
pub mod ocr;
pub mod orchestrator;

pub use types::*;
pub use pdf::*;
pub use ocr::*;
pub use orchestrator::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Error reading file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error extracting PDF text: {0}")]
    PdfParsing(String),

    #[error("Error decoding image: {0}")]
    ImageDecoding(String),

    #[error("Error extracting image text: {0}. Make sure Tesseract is installed.")]
    OcrProcessing(String),

    #[error(
        "No OCR engine is available. Install Tesseract and build with the `ocr` feature \
         to analyze image reports."
    )]
    OcrUnavailable,
}
