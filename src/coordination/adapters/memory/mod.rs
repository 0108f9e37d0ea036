//! In-memory language model for deterministic coordination flows.

mod scripted;

pub use scripted::ScriptedLanguageModel;
