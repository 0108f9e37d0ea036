//! Domain model for capability registration and ranking.
//!
//! Capabilities are identified by kind-namespaced names, described in natural
//! language and carry the description embedding computed at load time.
//! Service access and transport concerns stay outside the domain boundary.

mod candidate;
mod definition;
mod embedding;
mod entry;
mod error;
mod kind;
mod limit;
mod name;

pub use candidate::RankedCandidate;
pub use definition::CapabilityDefinition;
pub use embedding::Embedding;
pub use entry::CapabilityEntry;
pub use error::{CapabilityDomainError, ParseCapabilityKindError};
pub use kind::CapabilityKind;
pub use limit::CandidateLimit;
pub use name::CapabilityName;
