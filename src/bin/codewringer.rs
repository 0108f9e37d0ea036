//! Routes a task to the most relevant tool or agent and prints the result.
//!
//! Usage:
//!
//! ```text
//! codewringer [--config <path>] [run <task>... | config | capabilities |
//!             analyze <file> | refactor <file>]
//! ```

use clap::Parser;
use codewringer::cli::{Cli, execute};
use tokio::runtime::Builder;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    let runtime = Builder::new_current_thread().enable_all().build()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runtime.block_on(execute(cli, &mut out))?;
    Ok(())
}
