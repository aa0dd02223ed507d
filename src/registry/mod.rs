//! Agent registry discovery and caching for Concierge.
//!
//! The registry module discovers the agents hosted by a remote orchestration
//! service, assembles one [`domain::AgentRecord`] per agent (including its
//! routing aliases), and caches the result as an immutable snapshot that is
//! replaced atomically on refresh. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Caching services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
