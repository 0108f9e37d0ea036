//! Domain types for coordination and task outcomes.

mod message;
mod outcome;
mod response;
mod run_id;

pub use message::{ChatMessage, ChatRole};
pub use outcome::{DispatchOutcome, TaskOutcome};
pub use response::AgentResponse;
pub use run_id::TaskRunId;
