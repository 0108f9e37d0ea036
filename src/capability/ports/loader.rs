//! Capability loader port.

use crate::capability::domain::CapabilityDefinition;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for capability loader operations.
pub type CapabilityLoaderResult<T> = Result<T, CapabilityLoaderError>;

/// Enumerates the tool and agent definitions available to the registry.
#[async_trait]
pub trait CapabilityLoader: Send + Sync {
    /// Returns every known definition, tools and agents alike, in
    /// registration order.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityLoaderError`] when the definitions cannot be read.
    async fn load_definitions(&self) -> CapabilityLoaderResult<Vec<CapabilityDefinition>>;
}

/// Errors returned by capability loader implementations.
#[derive(Debug, Clone, Error)]
pub enum CapabilityLoaderError {
    /// The definition source could not be read.
    #[error("capability source error: {0}")]
    Unreadable(Arc<dyn std::error::Error + Send + Sync>),
}

impl CapabilityLoaderError {
    /// Wraps a failure reading the definition source.
    pub fn unreadable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unreadable(Arc::new(err))
    }
}
