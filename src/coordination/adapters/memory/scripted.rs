//! Language model that replays queued replies.

use crate::coordination::ports::{
    GenerationRequest, LanguageModel, LanguageModelError, LanguageModelResult,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Thread-safe language model returning scripted replies in order.
///
/// Every request is recorded. Once the script is exhausted further calls
/// fail as if the model were unreachable.
#[derive(Debug, Clone, Default)]
pub struct ScriptedLanguageModel {
    state: Arc<Mutex<ScriptState>>,
}

#[derive(Debug, Default)]
struct ScriptState {
    replies: VecDeque<LanguageModelResult<String>>,
    requests: Vec<GenerationRequest>,
}

fn lock_error(err: impl std::fmt::Display) -> LanguageModelError {
    LanguageModelError::unavailable(std::io::Error::other(err.to_string()))
}

impl ScriptedLanguageModel {
    /// Creates a model with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    ///
    /// # Errors
    ///
    /// Returns [`LanguageModelError`] when lock acquisition fails.
    pub fn push_reply(&self, reply: impl Into<String>) -> LanguageModelResult<()> {
        let mut state = self.state.lock().map_err(lock_error)?;
        state.replies.push_back(Ok(reply.into()));
        Ok(())
    }

    /// Queues a failure.
    ///
    /// # Errors
    ///
    /// Returns [`LanguageModelError`] when lock acquisition fails.
    pub fn push_failure(&self, error: LanguageModelError) -> LanguageModelResult<()> {
        let mut state = self.state.lock().map_err(lock_error)?;
        state.replies.push_back(Err(error));
        Ok(())
    }

    /// Returns every request received so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`LanguageModelError`] when lock acquisition fails.
    pub fn requests(&self) -> LanguageModelResult<Vec<GenerationRequest>> {
        let state = self.state.lock().map_err(lock_error)?;
        Ok(state.requests.clone())
    }
}

#[async_trait]
impl LanguageModel for ScriptedLanguageModel {
    async fn generate(&self, request: &GenerationRequest) -> LanguageModelResult<String> {
        let mut state = self.state.lock().map_err(lock_error)?;
        state.requests.push(request.clone());
        state.replies.pop_front().unwrap_or_else(|| {
            Err(LanguageModelError::unavailable(std::io::Error::other(
                "scripted language model has no replies left",
            )))
        })
    }
}
