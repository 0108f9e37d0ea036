//! Coordinating agent, dispatch, and the task routing facade.
//!
//! A task is ranked against the capability registry, the ranked candidates
//! are put to a coordinating language model, and the capability the model
//! names is invoked. Ports describe the language model; adapters provide a
//! scripted in-memory model and an Ollama chat client.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
