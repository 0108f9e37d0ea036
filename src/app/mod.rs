//! Application assembly.
//!
//! Wires configuration, the built-in catalogue, the capability registry, and
//! the task router over a concrete embedding service and language model.

use crate::capability::{
    adapters::{memory::StaticCapabilityLoader, ollama::OllamaEmbeddingService},
    ports::{EmbeddingService, EmbeddingServiceError},
    services::{CapabilityRegistry, CapabilityRegistryError, EmbeddingClient, RegistryHandle},
};
use crate::catalog::{CatalogError, agents::CodingAgent, builtin_loader};
use crate::config::{AppConfig, ConfigError, FsError};
use crate::coordination::{
    adapters::ollama::OllamaChatModel,
    ports::{LanguageModel, LanguageModelError},
    services::{CoordinatingAgent, CoordinationError, TaskRouter},
};
use crate::logging::LoggingError;
use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;

/// Top-level errors surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Logging could not be initialised.
    #[error(transparent)]
    Logging(#[from] LoggingError),
    /// The built-in catalogue could not be assembled.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The capability registry could not be loaded.
    #[error(transparent)]
    Registry(#[from] CapabilityRegistryError),
    /// Task routing failed.
    #[error(transparent)]
    Coordination(#[from] CoordinationError),
    /// The embedding adapter could not be constructed.
    #[error(transparent)]
    Embedding(#[from] EmbeddingServiceError),
    /// The language model adapter could not be constructed.
    #[error(transparent)]
    Model(#[from] LanguageModelError),
    /// An input file could not be read.
    #[error("failed to read '{path}': {source}")]
    Input {
        /// Path that was read.
        path: String,
        /// Underlying filesystem error.
        source: FsError,
    },
    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
    /// A task outcome could not be serialised.
    #[error("failed to serialise outcome: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application backed by a local Ollama server.
pub type OllamaApplication = Application<OllamaEmbeddingService, OllamaChatModel>;

/// A fully wired task router with its catalogue.
pub struct Application<E, M>
where
    E: EmbeddingService + 'static,
    M: LanguageModel + 'static,
{
    config: AppConfig,
    loader: StaticCapabilityLoader,
    language_model: Arc<M>,
    router: TaskRouter<E, M, DefaultClock>,
}

impl OllamaApplication {
    /// Connects to the Ollama server named in `config` and loads the
    /// built-in catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when an adapter cannot be built or the registry
    /// cannot be loaded.
    pub async fn connect(config: AppConfig) -> AppResult<Self> {
        let embeddings = Arc::new(OllamaEmbeddingService::new(
            &config.ollama_url,
            config.embedding_model.as_str(),
            config.request_timeout(),
        )?);
        let language_model = Arc::new(OllamaChatModel::new(
            &config.ollama_url,
            config.request_timeout(),
        )?);
        Self::assemble(config, embeddings, language_model).await
    }
}

impl<E, M> Application<E, M>
where
    E: EmbeddingService + 'static,
    M: LanguageModel + 'static,
{
    /// Builds the catalogue over the given services and loads the registry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when the configuration is invalid, the catalogue
    /// cannot be assembled, or the registry cannot be loaded.
    pub async fn assemble(
        config: AppConfig,
        embeddings: Arc<E>,
        language_model: Arc<M>,
    ) -> AppResult<Self> {
        let limit = config.candidate_limit()?;
        let client = EmbeddingClient::new(Arc::clone(&embeddings));
        let loader = builtin_loader(&config, embeddings, &language_model)?;
        let registry = CapabilityRegistry::load(&loader, &client).await?;
        let coordinator =
            CoordinatingAgent::new(config.manager_model.as_str(), Arc::clone(&language_model));
        let router = TaskRouter::new(
            RegistryHandle::new(registry),
            client,
            coordinator,
            limit,
            Arc::new(DefaultClock),
        );

        Ok(Self {
            config,
            loader,
            language_model,
            router,
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the task router.
    #[must_use]
    pub const fn router(&self) -> &TaskRouter<E, M, DefaultClock> {
        &self.router
    }

    /// Returns the loader holding the built-in catalogue.
    #[must_use]
    pub const fn loader(&self) -> &StaticCapabilityLoader {
        &self.loader
    }

    /// Returns a coding agent on the configured coding model.
    #[must_use]
    pub fn coding_agent(&self) -> CodingAgent<M> {
        CodingAgent::new(
            self.config.coding_model.as_str(),
            Arc::clone(&self.language_model),
        )
    }

    /// Reloads the registry from the catalogue and returns the entry count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Coordination`] when reloading fails.
    pub async fn reload(&self) -> AppResult<usize> {
        Ok(self.router.reload_capabilities(&self.loader).await?)
    }
}
