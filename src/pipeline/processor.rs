//! Pipeline orchestration.
//!
//! Failure policy is asymmetric on purpose: extraction failure aborts
//! the run (nothing downstream is meaningful without text), while
//! analysis failure does not — the extracted text is still valuable
//! to show, so the error rides inside the outcome instead.

use std::io::{Read, Seek};

use tracing::{info, warn};

use super::analysis::{AnalysisError, CompletionClient};
use super::extraction::{is_extraction_sentinel, SourceKind, TextExtractor};
use super::prompts;
use super::PipelineError;

/// Outcome of one pipeline run that reached the analysis stage.
#[derive(Debug)]
pub struct ReportAnalysis {
    /// Everything the extractor read, trimmed, in source order.
    pub extracted_text: String,
    /// The model's narrative, or the classified analysis failure.
    pub analysis: Result<String, AnalysisError>,
}

/// One-shot medical-report pipeline.
///
/// Holds a long-lived, read-only completion client injected at
/// construction; per-run data is exclusively owned by each
/// invocation, so separate instances need no locking.
pub struct ReportPipeline {
    extractor: TextExtractor,
    client: Box<dyn CompletionClient>,
}

impl ReportPipeline {
    /// Pipeline with the default extraction backends.
    pub fn new(client: Box<dyn CompletionClient>) -> Self {
        Self {
            extractor: TextExtractor::new(),
            client,
        }
    }

    /// Pipeline with a caller-supplied extractor (tests, custom OCR).
    pub fn with_extractor(extractor: TextExtractor, client: Box<dyn CompletionClient>) -> Self {
        Self { extractor, client }
    }

    /// Process one uploaded report file.
    ///
    /// `extension` is the declared type from the filename; it is
    /// checked before any byte of the file is read.
    pub fn process<R: Read + Seek>(
        &self,
        file: &mut R,
        extension: &str,
    ) -> Result<ReportAnalysis, PipelineError> {
        // 1. Dispatch — reject unknown types before any I/O.
        let kind = SourceKind::from_extension(extension)
            .ok_or_else(|| PipelineError::UnsupportedType(extension.to_string()))?;

        // 2. Extract — hard failures are terminal.
        let extracted_text = self.extractor.extract(file, kind)?;

        // 3. Validate — sentinel text counts as nothing readable; the
        //    completion service is never called for it.
        if extracted_text.trim().is_empty() || is_extraction_sentinel(&extracted_text) {
            info!(kind = %kind, "extraction produced no usable text");
            return Err(PipelineError::EmptyContent);
        }

        // 4. Analyze — failures ride along rather than aborting.
        let request = prompts::build_request(&extracted_text);
        let analysis = self.client.complete(&request);
        if let Err(err) = &analysis {
            warn!(%err, "analysis failed; returning extracted text anyway");
        }

        // 5. Package.
        Ok(ReportAnalysis {
            extracted_text,
            analysis,
        })
    }
}
