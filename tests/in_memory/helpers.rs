//! Shared helpers for in-memory integration tests.

use std::sync::Arc;

use codewringer::app::Application;
use codewringer::capability::adapters::memory::InMemoryEmbeddingService;
use codewringer::catalog::tools::GitTool;
use codewringer::config::AppConfig;
use codewringer::coordination::adapters::memory::ScriptedLanguageModel;

/// Description of the built-in research agent.
pub const RESEARCH_DESCRIPTION: &str =
    "Generates topics and answers questions using web-augmented data.";

/// Application over in-memory services.
pub type TestApplication = Application<InMemoryEmbeddingService, ScriptedLanguageModel>;

/// In-memory services shared with the application under test.
pub struct Harness {
    /// Embedding service with preset vectors.
    pub embeddings: Arc<InMemoryEmbeddingService>,
    /// Language model with scripted replies.
    pub model: Arc<ScriptedLanguageModel>,
}

impl Harness {
    /// Creates services where only the git tool and research agent embed.
    pub fn new() -> Self {
        let embeddings = Arc::new(InMemoryEmbeddingService::new());
        embeddings
            .set_vector(GitTool::DESCRIPTION, vec![1.0, 0.0])
            .expect("preset git vector");
        embeddings
            .set_vector(RESEARCH_DESCRIPTION, vec![0.0, 1.0])
            .expect("preset research vector");
        Self {
            embeddings,
            model: Arc::new(ScriptedLanguageModel::new()),
        }
    }

    /// Assembles the application with default configuration.
    pub async fn application(&self) -> TestApplication {
        Application::assemble(
            AppConfig::default(),
            Arc::clone(&self.embeddings),
            Arc::clone(&self.model),
        )
        .await
        .expect("application assembles")
    }

    /// Queues a language-model reply.
    pub fn reply(&self, text: &str) {
        self.model.push_reply(text).expect("queue reply");
    }

    /// Presets the embedding of `text`.
    pub fn embed(&self, text: &str, vector: Vec<f32>) {
        self.embeddings
            .set_vector(text, vector)
            .expect("preset vector");
    }
}
