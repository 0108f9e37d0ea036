//! Language-model call port.

use crate::coordination::domain::ChatMessage;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for language-model calls.
pub type LanguageModelResult<T> = Result<T, LanguageModelError>;

/// A single-turn generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    model: String,
    system_prompt: String,
    history: Vec<ChatMessage>,
    user_prompt: String,
}

impl GenerationRequest {
    /// Creates a request with no prior history.
    #[must_use]
    pub fn new(
        model: impl Into<String>,
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            system_prompt: system_prompt.into(),
            history: Vec::new(),
            user_prompt: user_prompt.into(),
        }
    }

    /// Sets the conversation history placed between system and user prompts.
    #[must_use]
    pub fn with_history(mut self, history: impl IntoIterator<Item = ChatMessage>) -> Self {
        self.history = history.into_iter().collect();
        self
    }

    /// Returns the model identifier.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the system instruction.
    #[must_use]
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Returns prior conversation turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Returns the prompt to answer.
    #[must_use]
    pub fn user_prompt(&self) -> &str {
        &self.user_prompt
    }

    /// Returns the full message sequence: system, history, then user.
    #[must_use]
    pub fn messages(&self) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(self.history.len().saturating_add(2));
        messages.push(ChatMessage::system(self.system_prompt.as_str()));
        messages.extend(self.history.iter().cloned());
        messages.push(ChatMessage::user(self.user_prompt.as_str()));
        messages
    }
}

/// Generates text from a prompt.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generates a reply for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`LanguageModelError`] when the model cannot be reached,
    /// rejects the request, or replies without text.
    async fn generate(&self, request: &GenerationRequest) -> LanguageModelResult<String>;
}

/// Errors returned by language-model adapters.
#[derive(Debug, Clone, Error)]
pub enum LanguageModelError {
    /// The model service could not be reached.
    #[error("language model unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// The model service answered with a failure status.
    #[error("language model rejected the request with status {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body as text.
        body: String,
    },

    /// The reply did not contain generated text.
    #[error("malformed language model response: {0}")]
    MalformedResponse(String),
}

impl LanguageModelError {
    /// Wraps a transport or runtime failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
