//! Capability registry and its reloadable handle.
//!
//! Loading embeds every capability description once. The resulting
//! [`CapabilityRegistry`] is immutable; [`RegistryHandle`] swaps whole
//! registries in on reload so readers never see a partially loaded one.

use super::EmbeddingClient;
use crate::capability::{
    domain::{CapabilityEntry, CapabilityName},
    ports::{CapabilityLoader, CapabilityLoaderError, EmbeddingService},
};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tokio::sync::Mutex;

/// Service-level errors for registry loading.
#[derive(Debug, Error)]
pub enum CapabilityRegistryError {
    /// The loader could not enumerate definitions.
    #[error(transparent)]
    Loader(#[from] CapabilityLoaderError),
    /// Two definitions share a namespaced name.
    #[error("duplicate capability name: {0}")]
    DuplicateCapability(CapabilityName),
    /// The registry lock was poisoned by a panicking writer.
    #[error("capability registry lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result type for registry operations.
pub type CapabilityRegistryResult<T> = Result<T, CapabilityRegistryError>;

/// Insertion-ordered, read-only set of loaded capabilities.
#[derive(Debug, Clone, Default)]
pub struct CapabilityRegistry {
    entries: Vec<CapabilityEntry>,
    index: HashMap<CapabilityName, usize>,
}

impl CapabilityRegistry {
    /// Returns a registry with no capabilities.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads every definition from `loader` and embeds its description.
    ///
    /// Embedding failures are not fatal: the affected entry is kept with an
    /// empty embedding and never ranks above zero relevance.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityRegistryError::Loader`] when the loader fails or
    /// [`CapabilityRegistryError::DuplicateCapability`] when two definitions
    /// share a namespaced name.
    pub async fn load<L, E>(
        loader: &L,
        embeddings: &EmbeddingClient<E>,
    ) -> CapabilityRegistryResult<Self>
    where
        L: CapabilityLoader + ?Sized,
        E: EmbeddingService,
    {
        let definitions = loader.load_definitions().await?;
        let mut registry = Self {
            entries: Vec::with_capacity(definitions.len()),
            index: HashMap::with_capacity(definitions.len()),
        };
        let mut expected_dimensions: Option<usize> = None;

        for definition in definitions {
            if registry.index.contains_key(definition.name()) {
                return Err(CapabilityRegistryError::DuplicateCapability(
                    definition.name().clone(),
                ));
            }

            let embedding = embeddings.embed(definition.description()).await;
            if embedding.is_empty() {
                tracing::warn!(
                    capability = %definition.name(),
                    "capability stored without embedding; it will not rank"
                );
            } else {
                match expected_dimensions {
                    None => expected_dimensions = Some(embedding.dimensions()),
                    Some(expected) if expected != embedding.dimensions() => {
                        tracing::warn!(
                            capability = %definition.name(),
                            expected,
                            actual = embedding.dimensions(),
                            "capability embedding dimension mismatch; it will not rank"
                        );
                    }
                    Some(_) => {}
                }
            }

            registry
                .index
                .insert(definition.name().clone(), registry.entries.len());
            registry
                .entries
                .push(CapabilityEntry::from_definition(definition, embedding));
        }

        tracing::info!(
            capabilities = registry.entries.len(),
            dimensions = expected_dimensions.unwrap_or_default(),
            "capability registry loaded"
        );
        Ok(registry)
    }

    /// Returns every entry in insertion order.
    #[must_use]
    pub fn all(&self) -> &[CapabilityEntry] {
        &self.entries
    }

    /// Finds an entry by namespaced name.
    #[must_use]
    pub fn get(&self, name: &CapabilityName) -> Option<&CapabilityEntry> {
        self.index.get(name).and_then(|&position| self.entries.get(position))
    }

    /// Returns the number of loaded capabilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no capabilities are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Owner of the current registry snapshot.
///
/// Reads hand out the snapshot behind an [`Arc`]. Reloads build the
/// replacement completely before swapping it in, and are serialised against
/// each other.
#[derive(Debug)]
pub struct RegistryHandle {
    current: RwLock<Arc<CapabilityRegistry>>,
    reload_lock: Mutex<()>,
}

impl RegistryHandle {
    /// Wraps an already loaded registry.
    #[must_use]
    pub fn new(registry: CapabilityRegistry) -> Self {
        Self {
            current: RwLock::new(Arc::new(registry)),
            reload_lock: Mutex::new(()),
        }
    }

    /// Returns the current registry snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityRegistryError::LockPoisoned`] when a writer
    /// panicked while holding the lock.
    pub fn snapshot(&self) -> CapabilityRegistryResult<Arc<CapabilityRegistry>> {
        let current = self
            .current
            .read()
            .map_err(|err| CapabilityRegistryError::LockPoisoned(err.to_string()))?;
        Ok(Arc::clone(&current))
    }

    /// Reloads the registry from `loader` and swaps it in.
    ///
    /// The previous snapshot stays current until the new one is complete; on
    /// failure it is kept.
    ///
    /// # Errors
    ///
    /// Returns any error of [`CapabilityRegistry::load`], or
    /// [`CapabilityRegistryError::LockPoisoned`].
    pub async fn reload<L, E>(
        &self,
        loader: &L,
        embeddings: &EmbeddingClient<E>,
    ) -> CapabilityRegistryResult<Arc<CapabilityRegistry>>
    where
        L: CapabilityLoader + ?Sized,
        E: EmbeddingService,
    {
        let _reload_guard = self.reload_lock.lock().await;
        let replacement = Arc::new(CapabilityRegistry::load(loader, embeddings).await?);
        let mut current = self
            .current
            .write()
            .map_err(|err| CapabilityRegistryError::LockPoisoned(err.to_string()))?;
        *current = Arc::clone(&replacement);
        Ok(replacement)
    }
}

impl Default for RegistryHandle {
    fn default() -> Self {
        Self::new(CapabilityRegistry::empty())
    }
}
