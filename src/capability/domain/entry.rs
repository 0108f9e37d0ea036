//! Registry entry with its cached description embedding.

use super::{CapabilityDefinition, CapabilityKind, CapabilityName, Embedding};
use crate::capability::ports::{CapabilityHandler, CapabilityInvocationResult};
use std::fmt;
use std::sync::Arc;

/// A loaded capability. Immutable once inserted into a registry.
#[derive(Clone)]
pub struct CapabilityEntry {
    name: CapabilityName,
    description: String,
    embedding: Embedding,
    handler: Arc<dyn CapabilityHandler>,
}

impl CapabilityEntry {
    /// Builds an entry from a definition and the embedding of its description.
    #[must_use]
    pub fn from_definition(definition: CapabilityDefinition, embedding: Embedding) -> Self {
        let (name, description, handler) = definition.into_parts();
        Self {
            name,
            description,
            embedding,
            handler,
        }
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

    /// Returns the description the embedding was computed from.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the cached description embedding (empty if embedding failed).
    #[must_use]
    pub const fn embedding(&self) -> &Embedding {
        &self.embedding
    }

    /// Runs the capability against a task.
    ///
    /// # Errors
    ///
    /// Propagates the handler's invocation error unchanged.
    pub async fn invoke(&self, task: &str) -> CapabilityInvocationResult<String> {
        self.handler.invoke(task).await
    }
}

impl fmt::Debug for CapabilityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("dimensions", &self.embedding.dimensions())
            .finish_non_exhaustive()
    }
}
