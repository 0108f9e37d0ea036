//! In-memory adapters for deterministic registry and ranking flows.

mod embedding;
mod handler;
mod loader;

pub use embedding::InMemoryEmbeddingService;
pub use handler::FnCapabilityHandler;
pub use loader::{StaticCapabilityLoader, StaticRegistrationError};
