//! Given steps for task routing BDD scenarios.

use super::world::{RoutingWorld, parse_vector};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a tool "{name}" described as "{description}" embedded at "{vector}""#)]
fn a_tool(
    world: &mut RoutingWorld,
    name: String,
    description: String,
    vector: String,
) -> Result<(), eyre::Report> {
    world
        .embeddings
        .set_vector(description.as_str(), parse_vector(&vector)?)
        .wrap_err("preset tool description vector")?;
    let handler = world.recording_handler(format!("tool_{name}"), format!("{name} output"));
    world
        .loader
        .register_tool(&name, &description, handler)
        .wrap_err("register tool")?;
    Ok(())
}

#[given(r#"an agent "{name}" described as "{description}" embedded at "{vector}""#)]
fn an_agent(
    world: &mut RoutingWorld,
    name: String,
    description: String,
    vector: String,
) -> Result<(), eyre::Report> {
    world
        .embeddings
        .set_vector(description.as_str(), parse_vector(&vector)?)
        .wrap_err("preset agent description vector")?;
    let handler = world.recording_handler(format!("agent_{name}"), format!("{name} output"));
    world
        .loader
        .register_agent(&name, &description, handler)
        .wrap_err("register agent")?;
    Ok(())
}

#[given(r#"the task "{task}" embeds at "{vector}""#)]
fn task_embeds_at(
    world: &mut RoutingWorld,
    task: String,
    vector: String,
) -> Result<(), eyre::Report> {
    world
        .embeddings
        .set_vector(task, parse_vector(&vector)?)
        .wrap_err("preset task vector")
}

#[given(r#"the coordinator replies "{reply}""#)]
fn coordinator_replies(world: &mut RoutingWorld, reply: String) -> Result<(), eyre::Report> {
    world
        .model
        .push_reply(reply)
        .wrap_err("queue coordinator reply")
}
