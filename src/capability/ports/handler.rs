//! Invocation port implemented by every tool and agent.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for capability invocations.
pub type CapabilityInvocationResult<T> = Result<T, CapabilityInvocationError>;

/// Entry point of a capability: task text in, result text out.
#[async_trait]
pub trait CapabilityHandler: Send + Sync {
    /// Executes the capability for the given task.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityInvocationError`] when the capability cannot
    /// complete. The dispatcher turns these into textual results.
    async fn invoke(&self, task: &str) -> CapabilityInvocationResult<String>;
}

/// Errors raised while invoking a capability.
#[derive(Debug, Clone, Error)]
pub enum CapabilityInvocationError {
    /// The task text was not acceptable input for the capability.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An external command exited unsuccessfully.
    #[error("command '{command}' failed: {stderr}")]
    CommandFailed {
        /// Command line that was executed.
        command: String,
        /// Captured standard error output.
        stderr: String,
    },

    /// Any other runtime failure.
    #[error("capability runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl CapabilityInvocationError {
    /// Wraps a runtime failure.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
