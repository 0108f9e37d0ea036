//! Ollama chat adapter.
//!
//! Calls `POST {base_url}/api/chat` with streaming disabled and returns the
//! trimmed `message.content` of the reply.

use crate::coordination::ports::{
    GenerationRequest, LanguageModel, LanguageModelError, LanguageModelResult,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Language model backed by a local or remote Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaChatModel {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: Option<ChatResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: String,
}

impl OllamaChatModel {
    /// Creates an adapter for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`LanguageModelError::Unavailable`] when the HTTP client
    /// cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> LanguageModelResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(LanguageModelError::unavailable)?;
        Ok(Self {
            client,
            endpoint: format!("{}/api/chat", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl LanguageModel for OllamaChatModel {
    async fn generate(&self, request: &GenerationRequest) -> LanguageModelResult<String> {
        let messages = request.messages();
        let body = ChatRequest {
            model: request.model(),
            messages: messages
                .iter()
                .map(|message| WireMessage {
                    role: message.role().as_str(),
                    content: message.content(),
                })
                .collect(),
            stream: false,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(LanguageModelError::unavailable)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(LanguageModelError::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }

        let reply: ChatResponse = response
            .json()
            .await
            .map_err(|err| LanguageModelError::MalformedResponse(err.to_string()))?;

        reply
            .message
            .map(|message| message.content.trim().to_owned())
            .ok_or_else(|| {
                LanguageModelError::MalformedResponse(format!(
                    "model '{}' returned no message",
                    request.model()
                ))
            })
    }
}
