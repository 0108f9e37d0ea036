//! Application configuration.
//!
//! Settings are read once at start from a YAML file. Every key is optional;
//! unknown keys are rejected so typos surface immediately.

mod fs;

pub use fs::{FsError, open_parent_dir, read_text_file};

use crate::capability::domain::CandidateLimit;
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default path of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read configuration file '{path}': {source}")]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying filesystem error.
        source: FsError,
    },
    /// The file is not valid YAML for [`AppConfig`].
    #[error("failed to parse configuration file '{path}': {source}")]
    Parse {
        /// Path that was parsed.
        path: String,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },
    /// A value is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Model identifiers, limits, and runtime options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Model used by the coordinating agent.
    pub manager_model: String,
    /// Model used to embed tasks and capability descriptions.
    pub embedding_model: String,
    /// Model used by the coding agent.
    pub coding_model: String,
    /// Model used by the research agent.
    pub research_model: String,
    /// Number of ranked candidates offered to the coordinator.
    pub tool_limit: usize,
    /// Base URL of the Ollama server.
    pub ollama_url: String,
    /// Timeout applied to every HTTP request, in seconds.
    pub request_timeout_secs: u64,
    /// Interpreter used by the compile tool.
    pub python_interpreter: String,
    /// Optional log file; console logging is always on.
    pub log_file: Option<String>,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            manager_model: "llama3.2".to_owned(),
            embedding_model: "bge-m3:latest".to_owned(),
            coding_model: "qwen2.5-coder:14b-instruct-q4_K_M".to_owned(),
            research_model: "llama3.2".to_owned(),
            tool_limit: 5,
            ollama_url: "http://localhost:11434".to_owned(),
            request_timeout_secs: 120,
            python_interpreter: "python3".to_owned(),
            log_file: Some("logs/codewringer.log".to_owned()),
            log_level: "info".to_owned(),
        }
    }
}

impl AppConfig {
    /// Parses and validates configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed YAML or unknown keys and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_yaml(path: &str, text: &str) -> Result<Self, ConfigError> {
        let config = if text.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str::<Self>(text).map_err(|source| ConfigError::Parse {
                path: path.to_owned(),
                source,
            })?
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, or any
    /// error of [`AppConfig::from_yaml`].
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let text = read_text_file(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml(path.as_str(), &text)
    }

    /// Loads configuration from `path`, using defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`AppConfig::load`] other than a missing file.
    pub fn load_or_default(path: &Utf8Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Read { source, .. }) if source.is_not_found() => Ok(Self::default()),
            other => other,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be at least 1".to_owned(),
            ));
        }
        self.candidate_limit().map(|_| ())
    }

    /// Returns the validated candidate limit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `tool_limit` is zero.
    pub fn candidate_limit(&self) -> Result<CandidateLimit, ConfigError> {
        CandidateLimit::new(self.tool_limit)
            .map_err(|_| ConfigError::Invalid("tool_limit must be at least 1".to_owned()))
    }

    /// Returns the HTTP request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns every setting as `(key, value)` pairs in declaration order.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("manager_model", self.manager_model.clone()),
            ("embedding_model", self.embedding_model.clone()),
            ("coding_model", self.coding_model.clone()),
            ("research_model", self.research_model.clone()),
            ("tool_limit", self.tool_limit.to_string()),
            ("ollama_url", self.ollama_url.clone()),
            ("request_timeout_secs", self.request_timeout_secs.to_string()),
            ("python_interpreter", self.python_interpreter.clone()),
            (
                "log_file",
                self.log_file.clone().unwrap_or_else(|| "(none)".to_owned()),
            ),
            ("log_level", self.log_level.clone()),
        ]
    }
}
