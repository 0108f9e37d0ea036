//! Adapter implementations for capability loading and embedding ports.

pub mod memory;
pub mod ollama;
