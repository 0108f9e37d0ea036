//! Validated, kind-namespaced capability name.

use super::{CapabilityDomainError, CapabilityKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a namespaced capability name, prefix included.
const MAX_NAME_LENGTH: usize = 100;

/// Unique registry key for a capability (e.g. `tool_git`, `agent_research`).
///
/// The kind prefix is part of the name, so a tool and an agent registered
/// under the same base name never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CapabilityName {
    kind: CapabilityKind,
    value: String,
}

impl CapabilityName {
    /// Creates a namespaced name from a kind and a base name.
    ///
    /// The input is trimmed and lowercased. A base name that already carries
    /// the kind prefix is not prefixed twice. Only characters in `[a-z0-9_]`
    /// are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityDomainError::EmptyCapabilityName`] when nothing
    /// remains after trimming and prefix removal,
    /// [`CapabilityDomainError::InvalidCapabilityName`] for characters outside
    /// `[a-z0-9_]`, or [`CapabilityDomainError::CapabilityNameTooLong`] when the
    /// namespaced name exceeds 100 characters.
    pub fn new(
        kind: CapabilityKind,
        raw_name: impl Into<String>,
    ) -> Result<Self, CapabilityDomainError> {
        let raw = raw_name.into();
        let normalized = raw.trim().to_ascii_lowercase();
        let base = normalized.strip_prefix(kind.prefix()).unwrap_or(&normalized);

        if base.is_empty() {
            return Err(CapabilityDomainError::EmptyCapabilityName);
        }

        let is_valid = base
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !is_valid {
            return Err(CapabilityDomainError::InvalidCapabilityName(raw));
        }

        let value = format!("{}{base}", kind.prefix());
        if value.len() > MAX_NAME_LENGTH {
            return Err(CapabilityDomainError::CapabilityNameTooLong(raw));
        }

        Ok(Self { kind, value })
    }

    /// Parses an already-namespaced name, deriving the kind from its prefix.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityDomainError::MissingKindPrefix`] when the value has
    /// neither prefix, or any error of [`CapabilityName::new`].
    pub fn parse(value: &str) -> Result<Self, CapabilityDomainError> {
        let normalized = value.trim().to_ascii_lowercase();
        [CapabilityKind::Tool, CapabilityKind::Agent]
            .into_iter()
            .find(|kind| normalized.starts_with(kind.prefix()))
            .ok_or_else(|| CapabilityDomainError::MissingKindPrefix(value.to_owned()))
            .and_then(|kind| Self::new(kind, normalized.as_str()))
    }

    /// Returns the kind encoded by the name prefix.
    #[must_use]
    pub const fn kind(&self) -> CapabilityKind {
        self.kind
    }

    /// Returns the namespaced name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the name without its kind prefix.
    #[must_use]
    pub fn base_name(&self) -> &str {
        self.value
            .strip_prefix(self.kind.prefix())
            .unwrap_or(&self.value)
    }
}

impl AsRef<str> for CapabilityName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CapabilityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for CapabilityName {
    type Error = CapabilityDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CapabilityName> for String {
    fn from(name: CapabilityName) -> Self {
        name.value
    }
}
