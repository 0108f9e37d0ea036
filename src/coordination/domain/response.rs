//! Reply produced by the coordinator or a model-backed agent.

use serde::{Deserialize, Serialize};

/// A reply attributed to the agent that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResponse {
    speaker: String,
    content: String,
}

impl AgentResponse {
    /// Creates a reply from `speaker` with the given content.
    #[must_use]
    pub fn new(speaker: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            content: content.into(),
        }
    }

    /// Returns the display name of the replying agent.
    #[must_use]
    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    /// Returns the reply text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consumes the reply and returns its text.
    #[must_use]
    pub fn into_content(self) -> String {
        self.content
    }
}
