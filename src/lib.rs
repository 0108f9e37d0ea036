//! Codewringer: embedding-ranked task routing for tools and agents.
//!
//! A task is embedded and compared against the cached description
//! embeddings of every registered capability. The most relevant candidates
//! are offered to a coordinating language model, and the capability it names
//! is invoked to produce the result.
//!
//! # Architecture
//!
//! Codewringer follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for models, embeddings, and loaders
//! - **Adapters**: Concrete implementations of ports (Ollama, in-memory)
//!
//! # Modules
//!
//! - [`capability`]: Capability registry, embeddings, and relevance ranking
//! - [`coordination`]: Coordinating agent, dispatch, and task routing
//! - [`catalog`]: Built-in tools and model-backed agents
//! - [`config`]: YAML configuration
//! - [`logging`]: `tracing` subscriber setup
//! - [`app`]: Application wiring
//! - [`cli`]: Command-line interface

pub mod app;
pub mod capability;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod coordination;
pub mod logging;
