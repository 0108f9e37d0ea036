//! Model-backed agent.

use crate::capability::ports::{CapabilityHandler, CapabilityInvocationResult};
use crate::coordination::{
    domain::{AgentResponse, ChatMessage},
    ports::{GenerationRequest, LanguageModel},
};
use async_trait::async_trait;
use std::sync::Arc;

/// Returns the system prompt used when an agent is given none.
#[must_use]
pub fn default_system_prompt(name: &str) -> String {
    format!("You are {name}, an expert in your domain.")
}

/// An agent that answers prompts with a single language-model call.
///
/// Registered as a capability, the agent answers the task text directly
/// with no history.
pub struct ModelAgent<M>
where
    M: LanguageModel,
{
    name: String,
    description: String,
    system_prompt: String,
    model: String,
    language_model: Arc<M>,
}

impl<M> ModelAgent<M>
where
    M: LanguageModel,
{
    /// Creates an agent using the default system prompt for `name`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        model: impl Into<String>,
        language_model: Arc<M>,
    ) -> Self {
        let display_name = name.into();
        Self {
            system_prompt: default_system_prompt(&display_name),
            name: display_name,
            description: description.into(),
            model: model.into(),
            language_model,
        }
    }

    /// Replaces the system prompt.
    #[must_use]
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    /// Returns the display name used as the reply speaker.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the agent description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the system prompt sent with every call.
    #[must_use]
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Returns the model identifier.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends `prompt` after `history` and returns the reply.
    ///
    /// A failed model call is reported in the reply text rather than as an
    /// error.
    pub async fn call(&self, prompt: &str, history: &[ChatMessage]) -> AgentResponse {
        let request = GenerationRequest::new(&self.model, &self.system_prompt, prompt)
            .with_history(history.iter().cloned());
        tracing::debug!(
            agent = %self.name,
            model = %self.model,
            prompt,
            "calling language model"
        );

        match self.language_model.generate(&request).await {
            Ok(content) => {
                tracing::debug!(
                    agent = %self.name,
                    response = %content,
                    "language model replied"
                );
                AgentResponse::new(&self.name, content)
            }
            Err(err) => {
                tracing::error!(
                    agent = %self.name,
                    model = %self.model,
                    error = %err,
                    "language model call failed"
                );
                AgentResponse::new(&self.name, format!("Error occurred: {err}"))
            }
        }
    }
}

#[async_trait]
impl<M> CapabilityHandler for ModelAgent<M>
where
    M: LanguageModel,
{
    async fn invoke(&self, task: &str) -> CapabilityInvocationResult<String> {
        Ok(self.call(task, &[]).await.into_content())
    }
}
