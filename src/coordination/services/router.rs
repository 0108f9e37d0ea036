//! Task routing facade: rank, decide, dispatch.

use super::{CoordinatingAgent, dispatch};
use crate::capability::{
    domain::CandidateLimit,
    ports::{CapabilityLoader, EmbeddingService},
    services::{
        CapabilityRegistry, CapabilityRegistryError, EmbeddingClient, RegistryHandle,
        RelevanceRanker,
    },
};
use crate::coordination::{
    domain::{TaskOutcome, TaskRunId},
    ports::LanguageModel,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task routing.
#[derive(Debug, Error)]
pub enum CoordinationError {
    /// The registry could not be read or reloaded.
    #[error(transparent)]
    Registry(#[from] CapabilityRegistryError),
}

/// Result type for task routing operations.
pub type CoordinationResult<T> = Result<T, CoordinationError>;

/// Routes tasks to the most relevant capability.
///
/// Each task is ranked against the current registry snapshot, put to the
/// coordinator, and dispatched, strictly in sequence.
pub struct TaskRouter<E, M, C>
where
    E: EmbeddingService,
    M: LanguageModel,
    C: Clock + Send + Sync,
{
    registry: RegistryHandle,
    embeddings: EmbeddingClient<E>,
    ranker: RelevanceRanker<E>,
    coordinator: CoordinatingAgent<M>,
    limit: CandidateLimit,
    clock: Arc<C>,
}

impl<E, M, C> TaskRouter<E, M, C>
where
    E: EmbeddingService,
    M: LanguageModel,
    C: Clock + Send + Sync,
{
    /// Creates a router over an already loaded registry.
    #[must_use]
    pub fn new(
        registry: RegistryHandle,
        embeddings: EmbeddingClient<E>,
        coordinator: CoordinatingAgent<M>,
        limit: CandidateLimit,
        clock: Arc<C>,
    ) -> Self {
        Self {
            registry,
            ranker: RelevanceRanker::new(embeddings.clone()),
            embeddings,
            coordinator,
            limit,
            clock,
        }
    }

    /// Returns the number of candidates offered to the coordinator.
    #[must_use]
    pub const fn limit(&self) -> CandidateLimit {
        self.limit
    }

    /// Runs one task end to end.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinationError::Registry`] when the registry snapshot
    /// cannot be read. Model and capability failures are reported in the
    /// outcome text instead.
    pub async fn run_task(&self, task: &str) -> CoordinationResult<TaskOutcome> {
        let run_id = TaskRunId::new();
        let registry = self.registry.snapshot()?;
        tracing::info!(%run_id, task, capabilities = registry.len(), "task received");

        let candidates = self.ranker.rank(&registry, task, self.limit).await;
        for candidate in &candidates {
            tracing::info!(
                %run_id,
                capability = %candidate.entry().name(),
                score = candidate.score(),
                "candidate selected"
            );
        }

        let decision = self.coordinator.decide(task, &candidates).await;
        let dispatched = dispatch(task, &decision, &candidates).await;
        match dispatched.delegated_to() {
            Some(capability) => tracing::info!(%run_id, %capability, "task delegated"),
            None => tracing::info!(%run_id, "task answered by coordinator"),
        }

        Ok(TaskOutcome::new(run_id, task, dispatched, self.clock.as_ref()))
    }

    /// Rebuilds the registry from `loader` and returns the new entry count.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinationError::Registry`] when loading fails; the
    /// previous registry stays in place.
    pub async fn reload_capabilities<L>(&self, loader: &L) -> CoordinationResult<usize>
    where
        L: CapabilityLoader + ?Sized,
    {
        let registry = self.registry.reload(loader, &self.embeddings).await?;
        Ok(registry.len())
    }

    /// Returns the current registry snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinationError::Registry`] when the snapshot lock is
    /// poisoned.
    pub fn capabilities(&self) -> CoordinationResult<Arc<CapabilityRegistry>> {
        Ok(self.registry.snapshot()?)
    }
}
