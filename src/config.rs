//! Process-wide configuration — API credential and model knobs.
//!
//! Loaded once at startup and read-only afterwards. The credential is
//! the only required setting; absence is fatal to the whole session
//! and must surface before any report file is accepted.

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Labsight";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the Groq API credential.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";
/// Optional override for the completion model.
pub const MODEL_VAR: &str = "LABSIGHT_MODEL";
/// Optional override for the completion endpoint base URL.
pub const BASE_URL_VAR: &str = "LABSIGHT_BASE_URL";

/// Default OpenAI-compatible Groq endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
/// Llama 3.3 70B — large enough for comprehensive medical analysis.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
/// Low temperature: medical content should minimize stylistic drift.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
/// Generous output budget for the template's mandated verbosity.
pub const DEFAULT_MAX_TOKENS: u32 = 8000;

/// Default `RUST_LOG`-style filter when none is set.
pub fn default_log_filter() -> &'static str {
    "info,labsight=debug"
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{API_KEY_VAR} not found. Please check your .env file.")]
    MissingApiKey,
}

/// Everything the analysis client needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl AnalyzerConfig {
    /// Read configuration from the process environment.
    ///
    /// `dotenvy` should have been given a chance to populate the
    /// environment before this is called (the binary does so).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an injectable lookup.
    ///
    /// Keeps tests independent of process-global environment state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            api_key,
            base_url: lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: lookup(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        })
    }
}
