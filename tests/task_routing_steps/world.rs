//! Shared world state for task routing BDD scenarios.

use std::sync::{Arc, Mutex};

use codewringer::capability::{
    adapters::memory::{FnCapabilityHandler, InMemoryEmbeddingService, StaticCapabilityLoader},
    domain::CandidateLimit,
    ports::CapabilityHandler,
    services::EmbeddingClient,
};
use codewringer::coordination::{
    adapters::memory::ScriptedLanguageModel,
    domain::TaskOutcome,
    services::TaskRouter,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Router type used by the BDD world.
pub type TestRouter = TaskRouter<InMemoryEmbeddingService, ScriptedLanguageModel, DefaultClock>;

/// Scenario world for task routing behaviour tests.
pub struct RoutingWorld {
    /// Embedding service with preset vectors.
    pub embeddings: Arc<InMemoryEmbeddingService>,
    /// Capabilities registered by the scenario.
    pub loader: StaticCapabilityLoader,
    /// Coordinator model with scripted replies.
    pub model: Arc<ScriptedLanguageModel>,
    /// Names of capabilities invoked, in order.
    pub invocations: Arc<Mutex<Vec<String>>>,
    /// Router built when the first task is routed.
    pub router: Option<TestRouter>,
    /// Outcome of the last routed task.
    pub outcome: Option<TaskOutcome>,
    /// Text of the last routed task.
    pub last_task: Option<String>,
}

impl RoutingWorld {
    /// Creates a world with no capabilities.
    #[must_use]
    pub fn new() -> Self {
        Self {
            embeddings: Arc::new(InMemoryEmbeddingService::new()),
            loader: StaticCapabilityLoader::new(),
            model: Arc::new(ScriptedLanguageModel::new()),
            invocations: Arc::new(Mutex::new(Vec::new())),
            router: None,
            outcome: None,
            last_task: None,
        }
    }

    /// Returns an embedding client over the world's service.
    pub fn client(&self) -> EmbeddingClient<InMemoryEmbeddingService> {
        EmbeddingClient::new(Arc::clone(&self.embeddings))
    }

    /// Returns a handler that records `name` and answers `output`.
    pub fn recording_handler(&self, name: String, output: String) -> Arc<dyn CapabilityHandler> {
        let invocations = Arc::clone(&self.invocations);
        Arc::new(FnCapabilityHandler::new(move |_task: &str| {
            if let Ok(mut calls) = invocations.lock() {
                calls.push(name.clone());
            }
            Ok(output.clone())
        }))
    }

    /// Returns the names of invoked capabilities.
    pub fn invoked(&self) -> Result<Vec<String>, eyre::Report> {
        self.invocations
            .lock()
            .map(|calls| calls.clone())
            .map_err(|err| eyre::eyre!("invocation log poisoned: {err}"))
    }
}

impl Default for RoutingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RoutingWorld {
    RoutingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a comma-separated vector such as `"0.1, 0.9"`.
pub fn parse_vector(text: &str) -> Result<Vec<f32>, eyre::Report> {
    text.split(',')
        .map(|part| {
            part.trim()
                .parse::<f32>()
                .map_err(|err| eyre::eyre!("invalid vector component '{part}': {err}"))
        })
        .collect()
}

/// Candidate limit used by every scenario.
pub fn limit() -> CandidateLimit {
    CandidateLimit::default()
}
