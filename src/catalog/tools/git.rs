//! Git tool: status, commit, and push in the working directory.

use super::process;
use crate::capability::ports::{
    CapabilityHandler, CapabilityInvocationError, CapabilityInvocationResult,
};
use async_trait::async_trait;

/// Reply for tasks that name no supported operation.
pub const UNSUPPORTED_GIT_OPERATION: &str = "Unsupported Git operation.";

const DEFAULT_COMMIT_MESSAGE: &str = "Automated commit";

/// Git operation selected from a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitOperation {
    /// `git status`.
    Status,
    /// `git commit -am <message>`.
    Commit {
        /// Commit message.
        message: String,
    },
    /// `git push`.
    Push,
}

impl GitOperation {
    /// Picks the operation a task asks for.
    ///
    /// Keywords are checked in the order status, commit, push, ignoring case.
    /// The commit message is whatever follows the first `commit` in the task.
    #[must_use]
    pub fn from_task(task: &str) -> Option<Self> {
        let lowered = task.to_lowercase();
        if lowered.contains("status") {
            return Some(Self::Status);
        }
        if lowered.contains("commit") {
            let message = task
                .split_once("commit")
                .map(|(_, rest)| rest.trim())
                .filter(|rest| !rest.is_empty())
                .unwrap_or(DEFAULT_COMMIT_MESSAGE);
            return Some(Self::Commit {
                message: message.to_owned(),
            });
        }
        if lowered.contains("push") {
            return Some(Self::Push);
        }
        None
    }

    fn args(&self) -> Vec<&str> {
        match self {
            Self::Status => vec!["status"],
            Self::Commit { message } => vec!["commit", "-am", message.as_str()],
            Self::Push => vec!["push"],
        }
    }
}

/// Runs git operations named in a task.
#[derive(Debug, Clone)]
pub struct GitTool {
    program: String,
}

impl GitTool {
    /// Description used for relevance ranking.
    pub const DESCRIPTION: &'static str =
        "Handles Git operations such as status, commit, and push.";

    /// Creates a tool invoking `git` from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Creates a tool invoking `program` instead of `git`.
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CapabilityHandler for GitTool {
    async fn invoke(&self, task: &str) -> CapabilityInvocationResult<String> {
        let Some(operation) = GitOperation::from_task(task) else {
            return Ok(UNSUPPORTED_GIT_OPERATION.to_owned());
        };

        let args = operation.args();
        let output = process::run(&self.program, &args, None).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            tracing::warn!(operation = ?operation, %stderr, "git operation failed");
            return Err(CapabilityInvocationError::CommandFailed {
                command: process::describe(&self.program, &args),
                stderr,
            });
        }

        tracing::info!(operation = ?operation, "git operation completed");
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
