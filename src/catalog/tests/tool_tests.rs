//! Unit tests for the built-in tools.

use std::sync::Arc;

use crate::capability::{
    adapters::memory::InMemoryEmbeddingService,
    ports::{CapabilityHandler, CapabilityInvocationError},
};
use crate::catalog::tools::{
    EmbedTool, GitOperation, GitTool, NO_RESULTS, UNSUPPORTED_GIT_OPERATION, summarise_page,
};
use rstest::rstest;

#[rstest]
#[case("show the git status", Some(GitOperation::Status))]
#[case("STATUS please", Some(GitOperation::Status))]
#[case("commit fix typo", Some(GitOperation::Commit { message: "fix typo".to_owned() }))]
#[case("please commit", Some(GitOperation::Commit { message: "Automated commit".to_owned() }))]
#[case("Commit everything", Some(GitOperation::Commit { message: "Automated commit".to_owned() }))]
#[case("push to origin", Some(GitOperation::Push))]
#[case("rebase onto main", None)]
fn git_operation_is_picked_from_keywords(
    #[case] task: &str,
    #[case] expected: Option<GitOperation>,
) {
    assert_eq!(GitOperation::from_task(task), expected);
}

#[tokio::test]
async fn git_tool_reports_unsupported_operations() {
    let tool = GitTool::with_program("definitely-not-a-real-git-binary");

    let result = tool.invoke("rebase onto main").await.expect("no command runs");

    assert_eq!(result, UNSUPPORTED_GIT_OPERATION);
}

#[cfg(unix)]
mod unix {
    use crate::capability::ports::{CapabilityHandler, CapabilityInvocationError};
    use crate::catalog::tools::{CompileTool, GitTool};

    #[tokio::test]
    async fn git_tool_passes_operation_arguments() {
        let tool = GitTool::with_program("echo");

        let status = tool.invoke("status").await.expect("echo succeeds");
        let commit = tool.invoke("commit add tests").await.expect("echo succeeds");

        assert_eq!(status, "status\n");
        assert_eq!(commit, "commit -am add tests\n");
    }

    #[tokio::test]
    async fn git_tool_failure_carries_command_line() {
        let tool = GitTool::with_program("false");

        let result = tool.invoke("push").await;

        assert!(matches!(
            result,
            Err(CapabilityInvocationError::CommandFailed { command, .. }) if command == "false push"
        ));
    }

    #[tokio::test]
    async fn compile_tool_reports_stdout_on_success() {
        let tool = CompileTool::new("sh");

        let result = tool.invoke("echo hi").await.expect("sh runs");

        assert_eq!(result, "Output:\nhi\n");
    }

    #[tokio::test]
    async fn compile_tool_reports_stderr_on_failure() {
        let tool = CompileTool::new("sh");

        let result = tool
            .invoke("echo oops >&2; exit 3")
            .await
            .expect("sh runs");

        assert_eq!(result, "Error:\noops\n");
    }
}

#[tokio::test]
async fn compile_tool_missing_interpreter_is_an_error() {
    let tool = crate::catalog::tools::CompileTool::new("definitely-not-a-real-interpreter");

    let result = tool.invoke("print(1)").await;

    assert!(matches!(result, Err(CapabilityInvocationError::Runtime(_))));
}

#[tokio::test]
async fn embed_tool_formats_vector() {
    let service = Arc::new(InMemoryEmbeddingService::new());
    service
        .set_vector("hello", vec![0.5, -1.0])
        .expect("preset vector");
    let tool = EmbedTool::new(service);

    let result = tool.invoke("hello").await.expect("embedding succeeds");

    assert_eq!(result, "[0.5, -1.0]");
}

#[tokio::test]
async fn embed_tool_propagates_service_failure() {
    let tool = EmbedTool::new(Arc::new(InMemoryEmbeddingService::new()));

    let result = tool.invoke("unknown").await;

    assert!(matches!(result, Err(CapabilityInvocationError::Runtime(_))));
}

#[test]
fn summarise_page_extracts_text() {
    let text = summarise_page("<html><body><p>Rust 2024 released</p></body></html>")
        .expect("page converts");

    assert!(text.contains("Rust 2024 released"));
}

#[test]
fn summarise_page_without_text_reports_no_results() {
    let text = summarise_page("<html><body></body></html>").expect("page converts");

    assert_eq!(text, NO_RESULTS);
}

#[test]
fn summarise_page_truncates_long_pages() {
    let body = "word ".repeat(1_000);
    let html = format!("<p>{body}</p>");

    let text = summarise_page(&html).expect("page converts");

    assert_eq!(text.chars().count(), 2000);
}
