//! Then steps for task routing BDD scenarios.

use super::world::{RoutingWorld, limit, run_async};
use codewringer::capability::services::RelevanceRanker;
use codewringer::coordination::domain::TaskOutcome;
use rstest_bdd_macros::then;

fn outcome(world: &RoutingWorld) -> Result<&TaskOutcome, eyre::Report> {
    world
        .outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no task has been routed in this scenario"))
}

#[then(r#"the top ranked candidate is "{name}""#)]
fn top_ranked_candidate(world: &mut RoutingWorld, name: String) -> Result<(), eyre::Report> {
    let router = world
        .router
        .as_ref()
        .ok_or_else(|| eyre::eyre!("router missing from scenario world"))?;
    let task = world
        .last_task
        .as_deref()
        .ok_or_else(|| eyre::eyre!("no task has been routed in this scenario"))?;
    let registry = router
        .capabilities()
        .map_err(|err| eyre::eyre!("registry snapshot failed: {err}"))?;
    let ranker = RelevanceRanker::new(world.client());
    let candidates = run_async(ranker.rank(&registry, task, limit()));
    let top = candidates
        .first()
        .map(|candidate| candidate.entry().name().as_str().to_owned());
    if top.as_deref() != Some(name.as_str()) {
        return Err(eyre::eyre!("expected top candidate '{name}', found {top:?}"));
    }
    Ok(())
}

#[then(r#"the task was delegated to "{name}""#)]
fn task_delegated_to(world: &mut RoutingWorld, name: String) -> Result<(), eyre::Report> {
    let delegated = outcome(world)?
        .delegated_to()
        .map(|capability| capability.as_str().to_owned());
    if delegated.as_deref() != Some(name.as_str()) {
        return Err(eyre::eyre!("expected delegation to '{name}', found {delegated:?}"));
    }
    Ok(())
}

#[then(r#"only "{name}" was invoked"#)]
fn only_invoked(world: &mut RoutingWorld, name: String) -> Result<(), eyre::Report> {
    let invoked = world.invoked()?;
    if invoked != vec![name.clone()] {
        return Err(eyre::eyre!("expected only '{name}' to run, found {invoked:?}"));
    }
    Ok(())
}

#[then("no capability was invoked")]
fn no_capability_invoked(world: &mut RoutingWorld) -> Result<(), eyre::Report> {
    let invoked = world.invoked()?;
    if !invoked.is_empty() {
        return Err(eyre::eyre!("expected no invocations, found {invoked:?}"));
    }
    if let Some(capability) = outcome(world)?.delegated_to() {
        return Err(eyre::eyre!("expected no delegation, found '{capability}'"));
    }
    Ok(())
}

#[then(r#"the result is "{expected}""#)]
fn result_is(world: &mut RoutingWorld, expected: String) -> Result<(), eyre::Report> {
    let result = outcome(world)?.result();
    if result != expected {
        return Err(eyre::eyre!("expected result '{expected}', found '{result}'"));
    }
    Ok(())
}
