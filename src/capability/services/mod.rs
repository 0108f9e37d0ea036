//! Registry, embedding, and ranking services for capabilities.

mod embedding_client;
mod ranker;
mod registry;
mod similarity;

pub use embedding_client::EmbeddingClient;
pub use ranker::RelevanceRanker;
pub use registry::{
    CapabilityRegistry, CapabilityRegistryError, CapabilityRegistryResult, RegistryHandle,
};
pub use similarity::cosine_similarity;
