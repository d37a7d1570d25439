//! Groq chat-completion client (OpenAI-compatible endpoint).
//!
//! Blocking HTTP, one request per pipeline run, no retry and no
//! request timeout — a long generation is allowed to take as long as
//! it takes, matching the interactive single-shot nature of the tool.

use tracing::{debug, info};

use super::types::{ChatRequest, ChatResponse, CompletionClient};
use super::AnalysisError;
use crate::config::AnalyzerConfig;
use crate::pipeline::prompts::AnalysisRequest;

pub struct GroqClient {
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    http: reqwest::blocking::Client,
}

impl GroqClient {
    /// Build a client from resolved configuration.
    pub fn new(config: &AnalyzerConfig) -> Self {
        let http = reqwest::blocking::Client::builder()
            // Block indefinitely rather than cut off a long generation
            .timeout(None::<std::time::Duration>)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            http,
        }
    }

    #[cfg(test)]
    fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl CompletionClient for GroqClient {
    fn complete(&self, request: &AnalysisRequest) -> Result<String, AnalysisError> {
        // Never attempt network I/O with a blank credential.
        if self.api_key.is_empty() {
            return Err(AnalysisError::NotConfigured);
        }

        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest::from_analysis(
            request,
            &self.model,
            self.temperature,
            self.max_tokens,
        );

        debug!(model = %self.model, "sending completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    AnalysisError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    AnalysisError::Timeout
                } else {
                    AnalysisError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            // Auth and quota failures land here with the provider's message.
            let message = response.text().unwrap_or_default();
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| AnalysisError::ResponseParsing(e.to_string()))?;

        let narrative = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(AnalysisError::EmptyResponse)?;

        info!(chars = narrative.len(), "completion received");
        Ok(narrative)
    }
}
