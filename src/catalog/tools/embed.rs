//! Embed tool: exposes the embedding service as a capability.

use crate::capability::ports::{
    CapabilityHandler, CapabilityInvocationError, CapabilityInvocationResult, EmbeddingService,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Returns the embedding of the task text, formatted as a list.
pub struct EmbedTool<E>
where
    E: EmbeddingService,
{
    service: Arc<E>,
}

impl<E> EmbedTool<E>
where
    E: EmbeddingService,
{
    /// Description used for relevance ranking.
    pub const DESCRIPTION: &'static str =
        "Generates embeddings for text using the configured embedding model.";

    /// Creates a tool over `service`.
    #[must_use]
    pub const fn new(service: Arc<E>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<E> CapabilityHandler for EmbedTool<E>
where
    E: EmbeddingService,
{
    async fn invoke(&self, task: &str) -> CapabilityInvocationResult<String> {
        let vector = self
            .service
            .embed(task)
            .await
            .map_err(CapabilityInvocationError::runtime)?;
        tracing::info!(dimensions = vector.len(), "embedding generated");
        Ok(format!("{vector:?}"))
    }
}
