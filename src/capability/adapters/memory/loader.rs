//! Explicit registration table used as the capability loader.

use crate::capability::{
    domain::{CapabilityDefinition, CapabilityDomainError},
    ports::{CapabilityHandler, CapabilityLoader, CapabilityLoaderError, CapabilityLoaderResult},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Loader backed by a startup-time table of definitions.
///
/// Definitions are returned in registration order. Registering more
/// definitions after a registry load takes effect on the next reload.
#[derive(Debug, Clone, Default)]
pub struct StaticCapabilityLoader {
    definitions: Arc<RwLock<Vec<CapabilityDefinition>>>,
}

fn lock_error(err: impl std::fmt::Display) -> CapabilityLoaderError {
    CapabilityLoaderError::unreadable(std::io::Error::other(err.to_string()))
}

impl StaticCapabilityLoader {
    /// Creates an empty registration table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a definition to the table.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityLoaderError`] when lock acquisition fails.
    pub fn register(&self, definition: CapabilityDefinition) -> CapabilityLoaderResult<()> {
        let mut definitions = self.definitions.write().map_err(lock_error)?;
        definitions.push(definition);
        Ok(())
    }

    /// Validates and registers a tool.
    ///
    /// # Errors
    ///
    /// Returns [`StaticRegistrationError`] when the definition is invalid or
    /// the table cannot be updated.
    pub fn register_tool(
        &self,
        name: &str,
        description: &str,
        handler: Arc<dyn CapabilityHandler>,
    ) -> Result<(), StaticRegistrationError> {
        let definition = CapabilityDefinition::tool(name, description, handler)?;
        self.register(definition)?;
        Ok(())
    }

    /// Validates and registers an agent.
    ///
    /// # Errors
    ///
    /// Returns [`StaticRegistrationError`] when the definition is invalid or
    /// the table cannot be updated.
    pub fn register_agent(
        &self,
        name: &str,
        description: &str,
        handler: Arc<dyn CapabilityHandler>,
    ) -> Result<(), StaticRegistrationError> {
        let definition = CapabilityDefinition::agent(name, description, handler)?;
        self.register(definition)?;
        Ok(())
    }
}

/// Errors returned while registering into a [`StaticCapabilityLoader`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum StaticRegistrationError {
    /// The definition failed domain validation.
    #[error(transparent)]
    Domain(#[from] CapabilityDomainError),
    /// The table could not be updated.
    #[error(transparent)]
    Loader(#[from] CapabilityLoaderError),
}

#[async_trait]
impl CapabilityLoader for StaticCapabilityLoader {
    async fn load_definitions(&self) -> CapabilityLoaderResult<Vec<CapabilityDefinition>> {
        let definitions = self.definitions.read().map_err(lock_error)?;
        Ok(definitions.clone())
    }
}
