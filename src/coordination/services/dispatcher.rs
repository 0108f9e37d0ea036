//! Dispatch of a task to the capability the coordinator named.

use super::mentions_capability;
use crate::capability::domain::RankedCandidate;
use crate::coordination::domain::{AgentResponse, DispatchOutcome};

/// Invokes the first ranked candidate named in `coordinator_response`.
///
/// Candidates are scanned in ranked order and at most one is invoked. When
/// none is named the coordinator reply is returned unchanged. Invocation
/// failures become the result text.
pub async fn dispatch(
    task: &str,
    coordinator_response: &AgentResponse,
    candidates: &[RankedCandidate<'_>],
) -> DispatchOutcome {
    let Some(chosen) = candidates.iter().find(|candidate| {
        mentions_capability(coordinator_response.content(), candidate.entry().name())
    }) else {
        tracing::info!("no candidate named by coordinator; returning its reply");
        return DispatchOutcome::answered_directly(coordinator_response.clone());
    };

    let entry = chosen.entry();
    tracing::info!(
        capability = %entry.name(),
        score = chosen.score(),
        "delegating task"
    );
    let content = match entry.invoke(task).await {
        Ok(result) => result,
        Err(err) => {
            tracing::warn!(
                capability = %entry.name(),
                error = %err,
                "capability invocation failed"
            );
            format!("Error invoking {}: {err}", entry.name())
        }
    };

    DispatchOutcome::delegated(
        entry.name().clone(),
        AgentResponse::new(entry.name().as_str(), content),
    )
}
