//! Embedding service port.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for embedding service calls.
pub type EmbeddingServiceResult<T> = Result<T, EmbeddingServiceError>;

/// Converts text into a fixed-length vector.
#[async_trait]
pub trait EmbeddingService: Send + Sync {
    /// Embeds a single piece of text.
    ///
    /// # Errors
    ///
    /// Returns [`EmbeddingServiceError`] when the service is unreachable or
    /// replies with something that is not an embedding.
    async fn embed(&self, text: &str) -> EmbeddingServiceResult<Vec<f32>>;
}

/// Errors returned by embedding service adapters.
#[derive(Debug, Clone, Error)]
pub enum EmbeddingServiceError {
    /// The service could not be reached or rejected the request.
    #[error("embedding service unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// The service replied without a usable vector.
    #[error("malformed embedding response: {0}")]
    MalformedResponse(String),
}

impl EmbeddingServiceError {
    /// Wraps a transport or runtime failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
