//! Capability registry and embedding-based relevance ranking.
//!
//! Tools and model-backed agents are registered as capabilities. Each
//! capability's description is embedded once when the registry loads, and
//! every incoming task is ranked against those cached embeddings. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Registry, embedding and ranking services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
