//! Relevance ranking of registry entries against a task.

use std::cmp::Ordering;

use super::{CapabilityRegistry, EmbeddingClient, cosine_similarity};
use crate::capability::{
    domain::{CandidateLimit, RankedCandidate},
    ports::EmbeddingService,
};

/// Ranks capabilities by cosine similarity between task and description.
///
/// Every call is a linear scan over the registry. That is intended for
/// registries of tens to low hundreds of entries; larger catalogues would
/// need an index.
pub struct RelevanceRanker<E>
where
    E: EmbeddingService,
{
    embeddings: EmbeddingClient<E>,
}

impl<E> RelevanceRanker<E>
where
    E: EmbeddingService,
{
    /// Creates a ranker that embeds tasks with `embeddings`.
    #[must_use]
    pub const fn new(embeddings: EmbeddingClient<E>) -> Self {
        Self { embeddings }
    }

    /// Returns the top `limit` entries for `task`, highest score first.
    ///
    /// Equal scores keep registry insertion order. The result is empty when
    /// the task cannot be embedded or when no entry has an embedding of the
    /// task's dimension, whatever the registry size.
    pub async fn rank<'r>(
        &self,
        registry: &'r CapabilityRegistry,
        task: &str,
        limit: CandidateLimit,
    ) -> Vec<RankedCandidate<'r>> {
        let task_embedding = self.embeddings.embed(task).await;
        if task_embedding.is_empty() {
            tracing::info!("task could not be embedded; no candidates ranked");
            return Vec::new();
        }
        let comparable = registry
            .all()
            .iter()
            .any(|entry| entry.embedding().dimensions() == task_embedding.dimensions());
        if !comparable {
            tracing::warn!(
                dimensions = task_embedding.dimensions(),
                capabilities = registry.len(),
                "no capability embedding is comparable with the task; no candidates ranked"
            );
            return Vec::new();
        }

        let mut candidates: Vec<RankedCandidate<'r>> = registry
            .all()
            .iter()
            .map(|entry| {
                let score =
                    cosine_similarity(task_embedding.as_slice(), entry.embedding().as_slice());
                RankedCandidate::new(score, entry)
            })
            .collect();

        candidates.sort_by(|left, right| {
            right
                .score()
                .partial_cmp(&left.score())
                .unwrap_or(Ordering::Equal)
        });
        candidates.truncate(limit.get());
        candidates
    }
}
