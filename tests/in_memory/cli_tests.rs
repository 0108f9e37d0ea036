//! Command output against an in-memory application.

use super::helpers::Harness;
use codewringer::cli::{Cli, Command, DEFAULT_TASK, execute, load_config, run_command};
use codewringer::config::ConfigError;
use camino::Utf8PathBuf;
use std::io::Write;

async fn output_of(harness: &Harness, command: Option<Command>) -> String {
    let app = harness.application().await;
    let mut out = Vec::new();
    run_command(&app, command, &mut out)
        .await
        .expect("command succeeds");
    String::from_utf8(out).expect("utf-8 output")
}

#[tokio::test]
async fn default_command_runs_the_default_task() {
    let harness = Harness::new();
    harness.reply("I would start by reading the file.");

    let output = output_of(&harness, None).await;

    assert_eq!(output, "Manager Result: I would start by reading the file.\n");
    let requests = harness.model.requests().expect("recorded requests");
    let prompt = requests.first().expect("coordinator called").user_prompt();
    assert!(prompt.starts_with(&format!("Task: {DEFAULT_TASK}")));
}

#[tokio::test]
async fn run_prints_the_result() {
    let harness = Harness::new();
    harness.reply("Nothing to delegate.");

    let output = output_of(
        &harness,
        Some(Command::Run {
            task: vec!["say".to_owned(), "hi".to_owned()],
            json: false,
        }),
    )
    .await;

    assert_eq!(output, "Result: Nothing to delegate.\n");
}

#[tokio::test]
async fn run_with_json_prints_the_outcome() {
    let harness = Harness::new();
    harness.reply("Nothing to delegate.");

    let output = output_of(
        &harness,
        Some(Command::Run {
            task: vec!["say".to_owned(), "hi".to_owned()],
            json: true,
        }),
    )
    .await;

    let outcome: serde_json::Value = serde_json::from_str(&output).expect("valid json");
    assert_eq!(outcome["task"], "say hi");
    assert_eq!(outcome["delegated_to"], serde_json::Value::Null);
    assert_eq!(outcome["response"]["content"], "Nothing to delegate.");
    assert_eq!(outcome["response"]["speaker"], "Manager Agent");
}

#[tokio::test]
async fn config_prints_every_setting() {
    let harness = Harness::new();

    let output = output_of(&harness, Some(Command::Config)).await;

    let mut lines = output.lines();
    assert_eq!(lines.next(), Some("Current Configuration:"));
    assert_eq!(lines.next(), Some("manager_model: llama3.2"));
    assert_eq!(output.lines().count(), 11);
}

#[tokio::test]
async fn capabilities_lists_kind_name_and_description() {
    let harness = Harness::new();

    let output = output_of(&harness, Some(Command::Capabilities)).await;

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines.first().copied(),
        Some("tool tool_git - Handles Git operations such as status, commit, and push.")
    );
    assert!(lines.last().is_some_and(|line| line.starts_with("agent agent_research - ")));
}

#[tokio::test]
async fn analyze_reads_the_file_and_prints_the_review() {
    let harness = Harness::new();
    harness.reply("Looks fine.");
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("sample.py");
    std::fs::File::create(&path)
        .and_then(|mut file| file.write_all(b"print('hi')\n"))
        .expect("write sample");
    let file = Utf8PathBuf::from_path_buf(path).expect("utf-8 path");

    let output = output_of(&harness, Some(Command::Analyze { file })).await;

    assert_eq!(output, "Analysis Result:\nLooks fine.\n");
    let requests = harness.model.requests().expect("recorded requests");
    let prompt = requests.first().expect("agent called").user_prompt();
    assert!(prompt.ends_with("print('hi')\n"));
}

#[tokio::test]
async fn refactor_of_missing_file_is_an_input_error() {
    let harness = Harness::new();
    let app = harness.application().await;
    let mut out = Vec::new();

    let result = run_command(
        &app,
        Some(Command::Refactor {
            file: Utf8PathBuf::from("definitely/missing.py"),
        }),
        &mut out,
    )
    .await;

    assert!(matches!(
        result,
        Err(codewringer::app::AppError::Input { .. })
    ));
    assert!(out.is_empty());
}

#[test]
fn explicit_missing_config_path_is_an_error() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("other.yaml")).expect("utf-8 path");

    let result = load_config(&path);

    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn explicit_config_path_is_loaded() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("other.yaml")).expect("utf-8 path");
    std::fs::write(path.as_std_path(), "tool_limit: 2\n").expect("write config");

    let config = load_config(&path).expect("config loads");

    assert_eq!(config.tool_limit, 2);
}

#[tokio::test]
async fn printing_config_does_not_create_the_log_file() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 path");
    let config_path = root.join("codewringer.yaml");
    let log_path = root.join("logs").join("codewringer.log");
    std::fs::write(config_path.as_std_path(), format!("log_file: {log_path}\n"))
        .expect("write config");
    let cli = Cli {
        config: config_path,
        command: Some(Command::Config),
    };

    let mut out = Vec::new();
    execute(cli, &mut out).await.expect("config command succeeds");

    let output = String::from_utf8(out).expect("utf-8 output");
    assert!(output.starts_with("Current Configuration:\n"));
    assert!(output.contains(&format!("log_file: {log_path}")));
    assert!(!log_path.as_std_path().exists());
}
