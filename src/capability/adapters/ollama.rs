//! Ollama embedding adapter.
//!
//! Calls `POST {base_url}/api/embed` with `{ "model": ..., "input": ... }`
//! and takes the first vector of the `embeddings` array in the reply.

use crate::capability::ports::{EmbeddingService, EmbeddingServiceError, EmbeddingServiceResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Embedding service backed by a local or remote Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaEmbeddingService {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    #[serde(default)]
    embeddings: Vec<Vec<f32>>,
}

impl OllamaEmbeddingService {
    /// Creates an adapter for `model` served at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`EmbeddingServiceError::Unavailable`] when the HTTP client
    /// cannot be constructed.
    pub fn new(
        base_url: &str,
        model: impl Into<String>,
        timeout: Duration,
    ) -> EmbeddingServiceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(EmbeddingServiceError::unavailable)?;
        Ok(Self {
            client,
            endpoint: format!("{}/api/embed", base_url.trim_end_matches('/')),
            model: model.into(),
        })
    }

    /// Returns the embedding model identifier.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl EmbeddingService for OllamaEmbeddingService {
    async fn embed(&self, text: &str) -> EmbeddingServiceResult<Vec<f32>> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&EmbedRequest {
                model: &self.model,
                input: text,
            })
            .send()
            .await
            .map_err(EmbeddingServiceError::unavailable)?
            .error_for_status()
            .map_err(EmbeddingServiceError::unavailable)?;

        let body: EmbedResponse = response
            .json()
            .await
            .map_err(|err| EmbeddingServiceError::MalformedResponse(err.to_string()))?;

        body.embeddings
            .into_iter()
            .next()
            .filter(|vector| !vector.is_empty())
            .ok_or_else(|| {
                EmbeddingServiceError::MalformedResponse(format!(
                    "model '{}' returned no embedding",
                    self.model
                ))
            })
    }
}
