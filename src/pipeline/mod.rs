//! The report pipeline: dispatch → extract → validate → analyze → package.
//!
//! Strictly linear and synchronous; each stage's output is the next
//! stage's input. Errors are translated at the stage that produced
//! them and never cross more than one stage untyped.

pub mod extraction;
pub mod prompts;
pub mod analysis;
pub mod processor;

pub use processor::*;

use thiserror::Error;

use extraction::ExtractionError;

/// Terminal pipeline failures — everything before the analysis stage.
///
/// Analysis failures are deliberately NOT here: they are embedded in
/// the outcome so the caller still receives the extracted text.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Unsupported file type '{0}'. Please upload PDF or image files.")]
    UnsupportedType(String),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(
        "No text could be extracted from the file. Please ensure the file contains readable text."
    )]
    EmptyContent,
}
