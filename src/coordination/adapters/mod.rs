//! Adapter implementations for the language-model port.

pub mod memory;
pub mod ollama;
