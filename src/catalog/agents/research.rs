//! Research agent: topic generation and question answering.

use crate::capability::ports::{CapabilityHandler, CapabilityInvocationResult};
use crate::coordination::{domain::AgentResponse, ports::LanguageModel, services::ModelAgent};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;

const NAME: &str = "Research Agent";
const DESCRIPTION: &str = "Generates topics and answers questions using web-augmented data.";
const SYSTEM_PROMPT: &str =
    "You are a research assistant. Generate topics or answer questions using web data when available.";

/// Agent that researches subjects and answers questions.
pub struct ResearchAgent<M>
where
    M: LanguageModel,
{
    agent: ModelAgent<M>,
}

impl<M> ResearchAgent<M>
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

    /// Proposes a topic for `subject` that is not among `previous_topics`.
    pub async fn generate_topic(
        &self,
        subject: &str,
        previous_topics: &BTreeSet<String>,
    ) -> AgentResponse {
        let avoided: Vec<&str> = previous_topics.iter().map(String::as_str).collect();
        let prompt = format!(
            "Generate a unique topic for the subject '{subject}'. Avoid these topics: {}.",
            avoided.join(", ")
        );
        self.agent.call(&prompt, &[]).await
    }

    /// Answers `question`, grounding the answer in `web_context` when given.
    pub async fn answer_question(&self, question: &str, web_context: Option<&str>) -> AgentResponse {
        let prompt = match web_context.filter(|context| !context.trim().is_empty()) {
            Some(context) => format!(
                "Answer the following question using the provided web context:\n\
                 Question: {question}\nWeb Context:\n{context}"
            ),
            None => format!("Answer the following question:\n{question}"),
        };
        self.agent.call(&prompt, &[]).await
    }
}

#[async_trait]
impl<M> CapabilityHandler for ResearchAgent<M>
where
    M: LanguageModel,
{
    async fn invoke(&self, task: &str) -> CapabilityInvocationResult<String> {
        self.agent.invoke(task).await
    }
}
