//! Step definitions for task routing scenarios.

mod given;
mod then;
mod when;
pub mod world;
