//! Coordinating agent that picks a capability for a task.

use super::ModelAgent;
use crate::capability::domain::{CapabilityKind, RankedCandidate};
use crate::coordination::{domain::AgentResponse, ports::LanguageModel};
use minijinja::Environment;
use serde::Serialize;
use std::sync::Arc;

/// Display name of the coordinator.
pub const COORDINATOR_NAME: &str = "Manager Agent";

/// Fixed instruction sent with every decision prompt.
pub const COORDINATOR_SYSTEM_PROMPT: &str = "You are a manager agent, responsible for delegating \
tasks to sub-agents and tools. Reply with the exact name of the single tool or agent that should \
handle the task.";

const DECISION_TEMPLATE: &str = "Task: {{ task }}
Available Tools:
{% for tool in tools %}- Tool: {{ tool.name }} - {{ tool.description }}
{% endfor %}Available Agents:
{% for agent in agents %}- Agent: {{ agent.name }} - {{ agent.description }}
{% endfor %}How would you proceed?";

#[derive(Debug, Serialize)]
struct PromptCandidate<'a> {
    name: &'a str,
    description: &'a str,
}

#[derive(Debug, Serialize)]
struct DecisionContext<'a> {
    task: &'a str,
    tools: Vec<PromptCandidate<'a>>,
    agents: Vec<PromptCandidate<'a>>,
}

/// Asks the coordinator model which ranked candidate should handle a task.
pub struct CoordinatingAgent<M>
where
    M: LanguageModel,
{
    agent: ModelAgent<M>,
}

impl<M> CoordinatingAgent<M>
where
    M: LanguageModel,
{
    /// Creates a coordinator calling `model` on `language_model`.
    #[must_use]
    pub fn new(model: impl Into<String>, language_model: Arc<M>) -> Self {
        let agent = ModelAgent::new(
            COORDINATOR_NAME,
            "Delegates tasks to the most relevant tool or agent.",
            model,
            language_model,
        )
        .with_system_prompt(COORDINATOR_SYSTEM_PROMPT);
        Self { agent }
    }

    /// Renders the decision prompt for `task` and `candidates`.
    ///
    /// Candidates are split into tools and agents, each group in ranked
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when the template cannot be rendered.
    pub fn render_prompt(
        task: &str,
        candidates: &[RankedCandidate<'_>],
    ) -> Result<String, minijinja::Error> {
        let (tools, agents): (Vec<_>, Vec<_>) = candidates
            .iter()
            .partition(|candidate| candidate.entry().kind() == CapabilityKind::Tool);
        let context = DecisionContext {
            task,
            tools: tools.into_iter().map(prompt_candidate).collect(),
            agents: agents.into_iter().map(prompt_candidate).collect(),
        };
        Environment::new().render_str(DECISION_TEMPLATE, context)
    }

    /// Asks the coordinator model how to proceed with `task`.
    ///
    /// Rendering and model failures come back as reply text describing the
    /// error.
    pub async fn decide(&self, task: &str, candidates: &[RankedCandidate<'_>]) -> AgentResponse {
        match Self::render_prompt(task, candidates) {
            Ok(prompt) => self.agent.call(&prompt, &[]).await,
            Err(err) => {
                tracing::error!(error = %err, "decision prompt could not be rendered");
                AgentResponse::new(self.agent.name(), format!("Error occurred: {err}"))
            }
        }
    }
}

fn prompt_candidate<'a>(candidate: &RankedCandidate<'a>) -> PromptCandidate<'a> {
    let entry = candidate.entry();
    PromptCandidate {
        name: entry.name().as_str(),
        description: entry.description(),
    }
}
