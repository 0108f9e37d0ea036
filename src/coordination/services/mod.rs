//! Coordination services: agents, dispatch, and task routing.

mod agent;
mod coordinator;
mod dispatcher;
mod matching;
mod router;

pub use agent::{ModelAgent, default_system_prompt};
pub use coordinator::{CoordinatingAgent, COORDINATOR_NAME, COORDINATOR_SYSTEM_PROMPT};
pub use dispatcher::dispatch;
pub use matching::mentions_capability;
pub use router::{CoordinationError, CoordinationResult, TaskRouter};
