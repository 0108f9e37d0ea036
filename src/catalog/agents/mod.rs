//! Model-backed agents with task-specific prompts.

mod coding;
mod research;

pub use coding::CodingAgent;
pub use research::ResearchAgent;
