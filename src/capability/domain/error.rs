//! Error types for capability domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing capability domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CapabilityDomainError {
    /// The capability name is empty after trimming and prefix removal.
    #[error("capability name must not be empty")]
    EmptyCapabilityName,

    /// The capability name contains characters outside `[a-z0-9_]`.
    #[error(
        "capability name '{0}' contains invalid characters (only lowercase alphanumeric and underscores allowed)"
    )]
    InvalidCapabilityName(String),

    /// The namespaced capability name exceeds the 100-character limit.
    #[error("capability name exceeds 100 character limit: {0}")]
    CapabilityNameTooLong(String),

    /// A namespaced name does not start with a known kind prefix.
    #[error("capability name '{0}' must start with 'tool_' or 'agent_'")]
    MissingKindPrefix(String),

    /// The capability description is empty after trimming.
    #[error("description for capability '{name}' must not be empty")]
    EmptyDescription {
        /// Namespaced capability name.
        name: String,
    },

    /// The candidate limit must be at least one.
    #[error("candidate limit must be at least 1")]
    ZeroCandidateLimit,
}

/// Error returned while parsing a capability kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown capability kind: {0}")]
pub struct ParseCapabilityKindError(pub String);
