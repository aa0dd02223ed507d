//! In-memory adapters for registry ports.

mod catalog;

pub use catalog::InMemoryAgentCatalog;
