//! Port contracts for capability loading, invocation, and embedding.
//!
//! Ports define infrastructure-agnostic interfaces consumed by the registry
//! and ranking services.

mod embedding;
mod handler;
mod loader;

pub use embedding::{EmbeddingService, EmbeddingServiceError, EmbeddingServiceResult};
pub use handler::{CapabilityHandler, CapabilityInvocationError, CapabilityInvocationResult};
pub use loader::{CapabilityLoader, CapabilityLoaderError, CapabilityLoaderResult};
