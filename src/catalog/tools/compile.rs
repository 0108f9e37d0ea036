//! Compile tool: runs Python source through an interpreter.

use super::process;
use crate::capability::ports::{CapabilityHandler, CapabilityInvocationResult};
use async_trait::async_trait;

/// Runs the task text as a Python program and reports its output.
///
/// The source is piped to `<interpreter> -` on standard input, so nothing is
/// written to disk.
#[derive(Debug, Clone)]
pub struct CompileTool {
    interpreter: String,
}

impl CompileTool {
    /// Description used for relevance ranking.
    pub const DESCRIPTION: &'static str =
        "Compiles and runs Python code, capturing outputs and errors.";

    /// Creates a tool running code with `interpreter`.
    #[must_use]
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }
}

#[async_trait]
impl CapabilityHandler for CompileTool {
    async fn invoke(&self, task: &str) -> CapabilityInvocationResult<String> {
        let output = process::run(&self.interpreter, &["-"], Some(task)).await?;
        if output.status.success() {
            tracing::info!(interpreter = %self.interpreter, "code executed successfully");
            Ok(format!("Output:\n{}", String::from_utf8_lossy(&output.stdout)))
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!(interpreter = %self.interpreter, %stderr, "code execution failed");
            Ok(format!("Error:\n{stderr}"))
        }
    }
}
