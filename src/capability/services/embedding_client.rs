//! Failure-isolating wrapper around the embedding service.

use crate::capability::{domain::Embedding, ports::EmbeddingService};
use std::sync::Arc;

/// Embeds text, turning service failures into an empty embedding.
///
/// Callers treat the empty embedding as "no relevance signal", so a flaky
/// embedding service degrades ranking instead of aborting it.
pub struct EmbeddingClient<E>
where
    E: EmbeddingService,
{
    service: Arc<E>,
}

impl<E> EmbeddingClient<E>
where
    E: EmbeddingService,
{
    /// Creates a client over the given service.
    #[must_use]
    pub const fn new(service: Arc<E>) -> Self {
        Self { service }
    }

    /// Embeds `text`, returning an empty embedding on failure.
    pub async fn embed(&self, text: &str) -> Embedding {
        match self.service.embed(text).await {
            Ok(values) => Embedding::new(values),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    chars = text.chars().count(),
                    "embedding request failed; continuing without relevance signal"
                );
                Embedding::empty()
            }
        }
    }
}

impl<E> Clone for EmbeddingClient<E>
where
    E: EmbeddingService,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}
