//! Built-in capability catalogue.
//!
//! Provides the stock tools (git, compile, embed, search) and model-backed
//! agents (coding, research), and fills a [`StaticCapabilityLoader`] with
//! them from configuration.
//!
//! [`StaticCapabilityLoader`]: crate::capability::adapters::memory::StaticCapabilityLoader

pub mod agents;
mod builtin;
pub mod tools;

pub use builtin::{CatalogError, builtin_loader};

#[cfg(test)]
mod tests;
