//! Labsight — plain-language analysis of medical reports.
//!
//! One uploaded file (PDF or raster image) goes through a strictly
//! linear pipeline: text extraction (PDF text layer, or OCR for
//! images) → non-empty validation → prompt construction → one
//! chat-completion call → a packaged outcome carrying both the
//! extracted text and the narrative analysis.
//!
//! Presentation surfaces (the bundled CLI, or an interactive UI) are
//! thin adapters over [`pipeline::ReportPipeline::process`]; nothing
//! in this library persists a report or retries a model call.

pub mod config;
pub mod pipeline;
pub mod report;

pub use config::{AnalyzerConfig, ConfigError};
pub use pipeline::analysis::{AnalysisError, CompletionClient, GroqClient};
pub use pipeline::extraction::{SourceKind, TextExtractor};
pub use pipeline::{PipelineError, ReportAnalysis, ReportPipeline};
