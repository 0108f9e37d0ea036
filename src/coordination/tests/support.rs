//! Shared fixtures for coordination unit tests.

use std::sync::Arc;

use crate::capability::{
    adapters::memory::{FnCapabilityHandler, InMemoryEmbeddingService, StaticCapabilityLoader},
    ports::{CapabilityHandler, CapabilityInvocationError},
    services::{CapabilityRegistry, EmbeddingClient},
};

pub(super) struct Registry {
    pub(super) embeddings: Arc<InMemoryEmbeddingService>,
    pub(super) loader: StaticCapabilityLoader,
}

impl Registry {
    pub(super) fn new() -> Self {
        Self {
            embeddings: Arc::new(InMemoryEmbeddingService::new()),
            loader: StaticCapabilityLoader::new(),
        }
    }

    pub(super) fn client(&self) -> EmbeddingClient<InMemoryEmbeddingService> {
        EmbeddingClient::new(Arc::clone(&self.embeddings))
    }

    pub(super) fn tool(&self, name: &str, description: &str, vector: Vec<f32>, output: &'static str) {
        self.preset(description, vector);
        self.loader
            .register_tool(name, description, replying(output))
            .expect("register tool");
    }

    pub(super) fn agent(&self, name: &str, description: &str, vector: Vec<f32>, output: &'static str) {
        self.preset(description, vector);
        self.loader
            .register_agent(name, description, replying(output))
            .expect("register agent");
    }

    pub(super) fn failing_tool(&self, name: &str, description: &str, vector: Vec<f32>) {
        self.preset(description, vector);
        let handler: Arc<dyn CapabilityHandler> = Arc::new(FnCapabilityHandler::new(|_task: &str| {
            Err(CapabilityInvocationError::InvalidInput("nothing to do".to_owned()))
        }));
        self.loader
            .register_tool(name, description, handler)
            .expect("register tool");
    }

    pub(super) fn preset(&self, text: &str, vector: Vec<f32>) {
        self.embeddings
            .set_vector(text, vector)
            .expect("preset vector");
    }

    pub(super) async fn load(&self) -> CapabilityRegistry {
        CapabilityRegistry::load(&self.loader, &self.client())
            .await
            .expect("registry should load")
    }
}

pub(super) fn replying(output: &'static str) -> Arc<dyn CapabilityHandler> {
    Arc::new(FnCapabilityHandler::new(move |_task: &str| Ok(output.to_owned())))
}
