//! Chat-completion wire types and the client abstraction.

use std::cell::Cell;

use serde::{Deserialize, Serialize};

use super::AnalysisError;
use crate::pipeline::prompts::AnalysisRequest;

/// Request body for an OpenAI-compatible `/chat/completions` call.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

impl<'a> ChatRequest<'a> {
    /// Assemble the wire request from a built prompt pair.
    pub fn from_analysis(
        request: &'a AnalysisRequest,
        model: &'a str,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature,
            max_tokens,
        }
    }
}

/// Response body, reduced to the only field consumed: the narrative.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: String,
}

/// Completion client abstraction (allows mocking for tests).
///
/// Implementations send the role-tagged pair and return the generated
/// narrative as opaque formatted text.
pub trait CompletionClient {
    fn complete(&self, request: &AnalysisRequest) -> Result<String, AnalysisError>;
}

/// Shared handles delegate; lets tests keep a counter on a mock that
/// is also owned by a pipeline.
impl<T: CompletionClient + ?Sized> CompletionClient for std::rc::Rc<T> {
    fn complete(&self, request: &AnalysisRequest) -> Result<String, AnalysisError> {
        (**self).complete(request)
    }
}

/// Mock completion client — fixed reply or fixed failure, with a call
/// counter so tests can assert the validation gate.
pub struct MockCompletionClient {
    reply: Option<String>,
    calls: Cell<usize>,
}

impl MockCompletionClient {
    /// Client that answers every request with the given narrative.
    pub fn replying(narrative: &str) -> Self {
        Self {
            reply: Some(narrative.to_string()),
            calls: Cell::new(0),
        }
    }

    /// Client that fails every request with a transport fault.
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Cell::new(0),
        }
    }

    /// How many times `complete` was invoked.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl CompletionClient for MockCompletionClient {
    fn complete(&self, _request: &AnalysisRequest) -> Result<String, AnalysisError> {
        self.calls.set(self.calls.get() + 1);
        match &self.reply {
            Some(narrative) => Ok(narrative.clone()),
            None => Err(AnalysisError::Connection("mock endpoint".into())),
        }
    }
}
