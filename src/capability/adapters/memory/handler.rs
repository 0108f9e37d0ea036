//! Closure-backed capability handler.

use crate::capability::ports::{CapabilityHandler, CapabilityInvocationResult};
use async_trait::async_trait;
use std::fmt;

/// Capability handler that runs a synchronous closure over the task text.
pub struct FnCapabilityHandler<F>
where
    F: Fn(&str) -> CapabilityInvocationResult<String> + Send + Sync,
{
    handler: F,
}

impl<F> FnCapabilityHandler<F>
where
    F: Fn(&str) -> CapabilityInvocationResult<String> + Send + Sync,
{
    /// Wraps a closure as a capability handler.
    #[must_use]
    pub const fn new(handler: F) -> Self {
        Self { handler }
    }
}

#[async_trait]
impl<F> CapabilityHandler for FnCapabilityHandler<F>
where
    F: Fn(&str) -> CapabilityInvocationResult<String> + Send + Sync,
{
    async fn invoke(&self, task: &str) -> CapabilityInvocationResult<String> {
        (self.handler)(task)
    }
}

impl<F> fmt::Debug for FnCapabilityHandler<F>
where
    F: Fn(&str) -> CapabilityInvocationResult<String> + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCapabilityHandler").finish_non_exhaustive()
    }
}
