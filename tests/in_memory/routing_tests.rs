//! End-to-end routing through the built-in catalogue.

use super::helpers::Harness;
use codewringer::capability::{
    adapters::memory::FnCapabilityHandler, domain::CapabilityName,
};
use std::sync::Arc;

#[tokio::test]
async fn research_question_reaches_the_research_agent() {
    let harness = Harness::new();
    harness.embed("what is the latest news on X", vec![0.1, 0.9]);
    harness.reply("agent_research");
    harness.reply("Here is the news.");
    let app = harness.application().await;

    let outcome = app
        .router()
        .run_task("what is the latest news on X")
        .await
        .expect("task routes");

    assert_eq!(
        outcome.delegated_to().map(CapabilityName::as_str),
        Some("agent_research")
    );
    assert_eq!(outcome.response().speaker(), "agent_research");
    assert_eq!(outcome.result(), "Here is the news.");

    let requests = harness.model.requests().expect("recorded requests");
    let [coordinator, research] = requests.as_slice() else {
        panic!("expected two model calls, found {}", requests.len());
    };
    assert_eq!(coordinator.model(), "llama3.2");
    assert_eq!(research.user_prompt(), "what is the latest news on X");
    assert!(research.system_prompt().starts_with("You are a research assistant."));
}

#[tokio::test]
async fn builtin_catalogue_loads_every_capability() {
    let harness = Harness::new();
    let app = harness.application().await;

    let registry = app.router().capabilities().expect("snapshot");

    assert_eq!(registry.len(), 6);
    let unembedded = registry
        .all()
        .iter()
        .filter(|entry| entry.embedding().is_empty())
        .count();
    assert_eq!(unembedded, 4);
}

#[tokio::test]
async fn reload_picks_up_new_registrations() {
    let harness = Harness::new();
    let app = harness.application().await;
    app.loader()
        .register_tool(
            "echo",
            "Repeats the task text.",
            Arc::new(FnCapabilityHandler::new(|task: &str| Ok(task.to_owned()))),
        )
        .expect("register tool");

    let count = app.reload().await.expect("reload succeeds");

    assert_eq!(count, 7);
}
