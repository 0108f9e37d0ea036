//! When steps for task routing BDD scenarios.

use std::sync::Arc;

use super::world::{RoutingWorld, limit, run_async};
use codewringer::capability::services::{CapabilityRegistry, RegistryHandle};
use codewringer::coordination::services::{CoordinatingAgent, TaskRouter};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::when;

#[when(r#"the task "{task}" is routed"#)]
fn task_is_routed(world: &mut RoutingWorld, task: String) -> Result<(), eyre::Report> {
    if world.router.is_none() {
        let registry = run_async(CapabilityRegistry::load(&world.loader, &world.client()))
            .wrap_err("load registry for scenario")?;
        world.router = Some(TaskRouter::new(
            RegistryHandle::new(registry),
            world.client(),
            CoordinatingAgent::new("llama3.2", Arc::clone(&world.model)),
            limit(),
            Arc::new(DefaultClock),
        ));
    }

    let router = world
        .router
        .as_ref()
        .ok_or_else(|| eyre::eyre!("router missing from scenario world"))?;
    let outcome = run_async(router.run_task(&task)).wrap_err("route task")?;
    world.outcome = Some(outcome);
    world.last_task = Some(task);
    Ok(())
}
