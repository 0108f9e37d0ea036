//! Command-line interface.

use crate::app::{AppError, AppResult, Application, OllamaApplication};
use crate::capability::ports::EmbeddingService;
use crate::config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH, read_text_file};
use crate::coordination::ports::LanguageModel;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use std::io::Write;

/// Task run when no subcommand is given.
pub const DEFAULT_TASK: &str = "Analyze and refactor a sample Python file.";

/// Routes natural-language tasks to the most relevant tool or agent.
#[derive(Debug, Parser)]
#[command(name = "codewringer", version, about)]
pub struct Cli {
    /// Path of the YAML configuration file.
    #[arg(
        long,
        global = true,
        env = "CODEWRINGER_CONFIG",
        default_value = DEFAULT_CONFIG_PATH
    )]
    pub config: Utf8PathBuf,

    /// Operation to perform; runs the default task when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands of the `codewringer` binary.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Route a task and print the result.
    Run {
        /// Task text; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        task: Vec<String>,
        /// Print the full outcome as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the active configuration.
    Config,
    /// List the loaded capabilities.
    Capabilities,
    /// Analyse a Python file with the coding agent.
    Analyze {
        /// File to analyse.
        file: Utf8PathBuf,
    },
    /// Suggest refactorings for a Python file with the coding agent.
    Refactor {
        /// File to refactor.
        file: Utf8PathBuf,
    },
}

/// Loads configuration, initialises logging, and executes `cli`.
///
/// # Errors
///
/// Returns [`AppError`] when configuration, logging, application assembly,
/// or the command itself fails.
pub async fn execute(cli: Cli, out: &mut impl Write) -> AppResult<()> {
    let config = load_config(&cli.config)?;
    if cli.command == Some(Command::Config) {
        return print_config(&config, out);
    }

    crate::logging::init(&config)?;
    tracing::debug!(config = %cli.config, "configuration loaded");

    let app = OllamaApplication::connect(config).await?;
    run_command(&app, cli.command, out).await
}

/// Loads the configuration named by `--config`.
///
/// Only the default path may be absent, in which case defaults apply. A path
/// given explicitly must exist.
///
/// # Errors
///
/// Returns [`ConfigError`] when the file cannot be read or parsed.
pub fn load_config(path: &Utf8Path) -> Result<AppConfig, ConfigError> {
    if path == Utf8Path::new(DEFAULT_CONFIG_PATH) {
        AppConfig::load_or_default(path)
    } else {
        AppConfig::load(path)
    }
}

/// Executes `command` against an assembled application.
///
/// # Errors
///
/// Returns [`AppError`] when routing fails, an input file cannot be read, or
/// output cannot be written.
pub async fn run_command<E, M>(
    app: &Application<E, M>,
    command: Option<Command>,
    out: &mut impl Write,
) -> AppResult<()>
where
    E: EmbeddingService + 'static,
    M: LanguageModel + 'static,
{
    match command {
        None => {
            let outcome = app.router().run_task(DEFAULT_TASK).await?;
            writeln!(out, "Manager Result: {}", outcome.result())?;
        }
        Some(Command::Run { task, json }) => {
            let outcome = app.router().run_task(&task.join(" ")).await?;
            if json {
                serde_json::to_writer_pretty(&mut *out, &outcome)?;
                writeln!(out)?;
            } else {
                writeln!(out, "Result: {}", outcome.result())?;
            }
        }
        Some(Command::Config) => print_config(app.config(), out)?,
        Some(Command::Capabilities) => {
            let registry = app.router().capabilities()?;
            for entry in registry.all() {
                writeln!(
                    out,
                    "{} {} - {}",
                    entry.kind(),
                    entry.name(),
                    entry.description()
                )?;
            }
        }
        Some(Command::Analyze { file }) => {
            let code = read_input(&file)?;
            let response = app.coding_agent().analyze_code(&code).await;
            writeln!(out, "Analysis Result:\n{}", response.content())?;
        }
        Some(Command::Refactor { file }) => {
            let code = read_input(&file)?;
            let response = app.coding_agent().refactor_code(&code).await;
            writeln!(out, "Refactoring Suggestions:\n{}", response.content())?;
        }
    }
    Ok(())
}

fn print_config(config: &AppConfig, out: &mut impl Write) -> AppResult<()> {
    writeln!(out, "Current Configuration:")?;
    for (key, value) in config.entries() {
        writeln!(out, "{key}: {value}")?;
    }
    Ok(())
}

fn read_input(path: &Utf8Path) -> AppResult<String> {
    read_text_file(path).map_err(|source| AppError::Input {
        path: path.to_string(),
        source,
    })
}
