//! Behaviour tests for ranking and delegating tasks.

mod task_routing_steps;

use rstest_bdd_macros::scenario;
use task_routing_steps::world::{RoutingWorld, world};

#[scenario(
    path = "tests/features/task_routing.feature",
    name = "Route a research question to the research agent"
)]
#[tokio::test(flavor = "multi_thread")]
async fn route_research_question(world: RoutingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_routing.feature",
    name = "The highest ranked named candidate wins"
)]
#[tokio::test(flavor = "multi_thread")]
async fn highest_ranked_named_candidate_wins(world: RoutingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_routing.feature",
    name = "Fall back to the coordinator reply"
)]
#[tokio::test(flavor = "multi_thread")]
async fn fall_back_to_coordinator_reply(world: RoutingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_routing.feature",
    name = "A task without an embedding gets no candidates"
)]
#[tokio::test(flavor = "multi_thread")]
async fn unembedded_task_gets_no_candidates(world: RoutingWorld) {
    let _ = world;
}
