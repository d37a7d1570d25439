//! Analysis — the model-invocation stage of the pipeline.
//!
//! One outbound chat-completion request per pipeline run, fixed model
//! and sampling parameters, no retries. Failures are classified, not
//! retried: this is a single-shot advisory tool, not an SLA service.

pub mod types;
pub mod groq;

pub use types::*;
pub use groq::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("API Error: no API key is configured. Please configure your Groq API key.")]
    NotConfigured,

    #[error("Error analyzing report: could not connect to {0}")]
    Connection(String),

    #[error("Error analyzing report: the request timed out")]
    Timeout,

    #[error("Error analyzing report: request failed: {0}")]
    Transport(String),

    #[error("Error analyzing report: the service returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Error analyzing report: unreadable response: {0}")]
    ResponseParsing(String),

    #[error("Error analyzing report: the service returned no completion")]
    EmptyResponse,
}
