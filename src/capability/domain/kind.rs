//! Capability kind discriminator.

use super::ParseCapabilityKindError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a capability is a plain tool or a model-backed agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityKind {
    /// A stateless function-like capability invoked with the task text.
    Tool,
    /// A capability that issues its own nested language-model call.
    Agent,
}

impl CapabilityKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tool => "tool",
            Self::Agent => "agent",
        }
    }

    /// Returns the namespace prefix applied to capability names of this kind.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Tool => "tool_",
            Self::Agent => "agent_",
        }
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for CapabilityKind {
    type Error = ParseCapabilityKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "tool" => Ok(Self::Tool),
            "agent" => Ok(Self::Agent),
            _ => Err(ParseCapabilityKindError(value.to_owned())),
        }
    }
}
