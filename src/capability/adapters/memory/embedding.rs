//! In-memory embedding service keyed by exact text.

use crate::capability::ports::{EmbeddingService, EmbeddingServiceError, EmbeddingServiceResult};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

/// Thread-safe embedding service returning preset vectors.
///
/// Text without a preset vector fails like an unreachable service, so tests
/// can exercise the degraded ranking path.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmbeddingService {
    state: Arc<RwLock<InMemoryEmbeddingState>>,
}

#[derive(Debug, Default)]
struct InMemoryEmbeddingState {
    vectors: HashMap<String, Vec<f32>>,
    failing: HashSet<String>,
    calls: usize,
}

fn lock_error(err: impl std::fmt::Display) -> EmbeddingServiceError {
    EmbeddingServiceError::unavailable(std::io::Error::other(err.to_string()))
}

impl InMemoryEmbeddingService {
    /// Creates a service with no preset vectors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Presets the vector returned for `text`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`EmbeddingServiceError`] when lock acquisition fails.
    pub fn set_vector(
        &self,
        text: impl Into<String>,
        vector: Vec<f32>,
    ) -> EmbeddingServiceResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let key = text.into();
        state.failing.remove(&key);
        state.vectors.insert(key, vector);
        Ok(())
    }

    /// Makes every request for `text` fail.
    ///
    /// # Errors
    ///
    /// Returns [`EmbeddingServiceError`] when lock acquisition fails.
    pub fn fail_on(&self, text: impl Into<String>) -> EmbeddingServiceResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.failing.insert(text.into());
        Ok(())
    }

    /// Returns how many embedding requests have been served or failed.
    ///
    /// # Errors
    ///
    /// Returns [`EmbeddingServiceError`] when lock acquisition fails.
    pub fn calls(&self) -> EmbeddingServiceResult<usize> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.calls)
    }
}

#[async_trait]
impl EmbeddingService for InMemoryEmbeddingService {
    async fn embed(&self, text: &str) -> EmbeddingServiceResult<Vec<f32>> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.calls = state.calls.saturating_add(1);

        if state.failing.contains(text) {
            return Err(EmbeddingServiceError::unavailable(std::io::Error::other(
                format!("embedding refused for '{text}'"),
            )));
        }

        state.vectors.get(text).cloned().ok_or_else(|| {
            EmbeddingServiceError::unavailable(std::io::Error::other(format!(
                "no embedding preset for '{text}'"
            )))
        })
    }
}
