//! Coding agent: analysis, refactoring, and generation.

use crate::capability::ports::{CapabilityHandler, CapabilityInvocationResult};
use crate::coordination::{domain::AgentResponse, ports::LanguageModel, services::ModelAgent};
use async_trait::async_trait;
use std::sync::Arc;

const NAME: &str = "Code Agent";
const DESCRIPTION: &str = "Specializes in code analysis, refactoring, and generation.";
const SYSTEM_PROMPT: &str = "You are a coding expert. Provide detailed code analysis, refactoring \
suggestions, or generate code as requested.";

/// Agent specialised in working on Python source code.
pub struct CodingAgent<M>
where
    M: LanguageModel,
{
    agent: ModelAgent<M>,
}

impl<M> CodingAgent<M>
where
    M: LanguageModel,
{
    /// Creates the agent using `model` on `language_model`.
    #[must_use]
    pub fn new(model: impl Into<String>, language_model: Arc<M>) -> Self {
        Self {
            agent: ModelAgent::new(NAME, DESCRIPTION, model, language_model)
                .with_system_prompt(SYSTEM_PROMPT),
        }
    }

    /// Returns the agent description used for ranking.
    #[must_use]
    pub fn description(&self) -> &str {
        self.agent.description()
    }

    /// Reviews `code` for improvements and bugs.
    pub async fn analyze_code(&self, code: &str) -> AgentResponse {
        let prompt = format!(
            "Analyze the following Python code for potential improvements and identify any \
             bugs:\n\n{code}"
        );
        self.agent.call(&prompt, &[]).await
    }

    /// Suggests refactorings for `code`.
    pub async fn refactor_code(&self, code: &str) -> AgentResponse {
        let prompt = format!(
            "Provide refactoring suggestions for the following Python code. Include variable \
             renaming, improved readability, and potential bug fixes:\n\n{code}"
        );
        self.agent.call(&prompt, &[]).await
    }

    /// Writes code matching `description`.
    pub async fn generate_code(&self, description: &str) -> AgentResponse {
        let prompt =
            format!("Generate Python code based on the following description:\n\n{description}");
        self.agent.call(&prompt, &[]).await
    }
}

#[async_trait]
impl<M> CapabilityHandler for CodingAgent<M>
where
    M: LanguageModel,
{
    async fn invoke(&self, task: &str) -> CapabilityInvocationResult<String> {
        self.agent.invoke(task).await
    }
}
