//! Capability definition supplied by a loader.

use super::{CapabilityDomainError, CapabilityKind, CapabilityName};
use crate::capability::ports::CapabilityHandler;
use std::fmt;
use std::sync::Arc;

/// A capability as enumerated by a loader, before its embedding is computed.
#[derive(Clone)]
pub struct CapabilityDefinition {
    name: CapabilityName,
    description: String,
    handler: Arc<dyn CapabilityHandler>,
}

impl CapabilityDefinition {
    /// Creates a definition for a capability of the given kind.
    ///
    /// The base name is namespaced with the kind prefix and the description
    /// is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityDomainError`] when the name is invalid or the
    /// description is blank.
    pub fn new(
        kind: CapabilityKind,
        raw_name: impl Into<String>,
        description: impl Into<String>,
        handler: Arc<dyn CapabilityHandler>,
    ) -> Result<Self, CapabilityDomainError> {
        let name = CapabilityName::new(kind, raw_name)?;
        let normalized_description = description.into().trim().to_owned();
        if normalized_description.is_empty() {
            return Err(CapabilityDomainError::EmptyDescription {
                name: name.as_str().to_owned(),
            });
        }

        Ok(Self {
            name,
            description: normalized_description,
            handler,
        })
    }

    /// Creates a tool definition.
    ///
    /// # Errors
    ///
    /// See [`CapabilityDefinition::new`].
    pub fn tool(
        raw_name: impl Into<String>,
        description: impl Into<String>,
        handler: Arc<dyn CapabilityHandler>,
    ) -> Result<Self, CapabilityDomainError> {
        Self::new(CapabilityKind::Tool, raw_name, description, handler)
    }

    /// Creates an agent definition.
    ///
    /// # Errors
    ///
    /// See [`CapabilityDefinition::new`].
    pub fn agent(
        raw_name: impl Into<String>,
        description: impl Into<String>,
        handler: Arc<dyn CapabilityHandler>,
    ) -> Result<Self, CapabilityDomainError> {
        Self::new(CapabilityKind::Agent, raw_name, description, handler)
    }

    /// Returns the capability kind.
    #[must_use]
    pub const fn kind(&self) -> CapabilityKind {
        self.name.kind()
    }

    /// Returns the namespaced capability name.
    #[must_use]
    pub const fn name(&self) -> &CapabilityName {
        &self.name
    }

    /// Returns the description used for relevance ranking.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Splits the definition into its name, description, and handler.
    #[must_use]
    pub fn into_parts(self) -> (CapabilityName, String, Arc<dyn CapabilityHandler>) {
        (self.name, self.description, self.handler)
    }
}

impl fmt::Debug for CapabilityDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
