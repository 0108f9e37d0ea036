//! Port abstractions for coordination.

pub mod language_model;

pub use language_model::{
    GenerationRequest, LanguageModel, LanguageModelError, LanguageModelResult,
};

#[cfg(test)]
pub use language_model::MockLanguageModel;
