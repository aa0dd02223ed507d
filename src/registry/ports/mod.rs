//! Port contracts for agent registry discovery.
//!
//! Ports define infrastructure-agnostic interfaces to the hosting service's
//! read API.

pub mod catalog;

pub use catalog::{AgentCatalog, AgentSummary, AliasPage, CatalogError, CatalogResult, SummaryPage};

#[cfg(test)]
pub use catalog::MockAgentCatalog;
