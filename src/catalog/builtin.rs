//! Registration of the built-in tools and agents.

use super::{
    agents::{CodingAgent, ResearchAgent},
    tools::{CompileTool, EmbedTool, GitTool, SearchTool},
};
use crate::capability::{
    adapters::memory::{StaticCapabilityLoader, StaticRegistrationError},
    ports::{CapabilityInvocationError, EmbeddingService},
};
use crate::config::AppConfig;
use crate::coordination::ports::LanguageModel;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while assembling the built-in catalogue.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A definition was rejected.
    #[error(transparent)]
    Registration(#[from] StaticRegistrationError),
    /// A tool could not be constructed.
    #[error(transparent)]
    Tool(#[from] CapabilityInvocationError),
}

/// Builds a loader holding every built-in capability.
///
/// Tools are registered before agents, each in a fixed order, so registry
/// insertion order is stable across runs.
///
/// # Errors
///
/// Returns [`CatalogError`] when a definition is invalid or a tool cannot be
/// constructed.
pub fn builtin_loader<E, M>(
    config: &AppConfig,
    embeddings: Arc<E>,
    language_model: &Arc<M>,
) -> Result<StaticCapabilityLoader, CatalogError>
where
    E: EmbeddingService + 'static,
    M: LanguageModel + 'static,
{
    let loader = StaticCapabilityLoader::new();

    loader.register_tool("git", GitTool::DESCRIPTION, Arc::new(GitTool::new()))?;
    loader.register_tool(
        "compile",
        CompileTool::DESCRIPTION,
        Arc::new(CompileTool::new(config.python_interpreter.as_str())),
    )?;
    loader.register_tool(
        "embed",
        EmbedTool::<E>::DESCRIPTION,
        Arc::new(EmbedTool::new(embeddings)),
    )?;
    loader.register_tool(
        "search",
        SearchTool::DESCRIPTION,
        Arc::new(SearchTool::new(config.request_timeout())?),
    )?;

    let coding = CodingAgent::new(config.coding_model.as_str(), Arc::clone(language_model));
    let coding_description = coding.description().to_owned();
    loader.register_agent("coding", &coding_description, Arc::new(coding))?;

    let research = ResearchAgent::new(config.research_model.as_str(), Arc::clone(language_model));
    let research_description = research.description().to_owned();
    loader.register_agent("research", &research_description, Arc::new(research))?;

    Ok(loader)
}
