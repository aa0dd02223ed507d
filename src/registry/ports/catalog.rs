//! Catalog port for the hosting service's agent listing API.

use crate::registry::domain::{AgentDetail, AgentId, AliasRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Minimal agent entry returned by the paged listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSummary {
    /// Remote agent identifier.
    pub id: AgentId,
    /// Display name.
    pub name: String,
}

/// One page of agent summaries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummaryPage {
    /// Summaries on this page.
    pub summaries: Vec<AgentSummary>,
    /// Token for the next page, or `None` when the listing is exhausted.
    pub next_token: Option<String>,
}

/// One page of alias records for a single agent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AliasPage {
    /// Aliases on this page.
    pub aliases: Vec<AliasRecord>,
    /// Token for the next page, or `None` when the listing is exhausted.
    pub next_token: Option<String>,
}

/// Read-only access to the agents registered with the hosting service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AgentCatalog: Send + Sync {
    /// Lists one page of agent summaries.
    ///
    /// Passing `None` requests the first page.
    async fn list_agents(&self, page_token: Option<String>) -> CatalogResult<SummaryPage>;

    /// Fetches full detail for one agent.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when the agent no longer exists.
    async fn get_agent(&self, agent_id: &AgentId) -> CatalogResult<AgentDetail>;

    /// Lists one page of aliases for an agent.
    async fn list_agent_aliases(
        &self,
        agent_id: &AgentId,
        page_token: Option<String>,
    ) -> CatalogResult<AliasPage>;
}

/// Errors returned by catalog adapters.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The agent was not found.
    #[error("agent not found: {0}")]
    NotFound(AgentId),

    /// The remote payload could not be mapped into domain types.
    #[error("invalid catalog data: {0}")]
    InvalidData(Arc<dyn std::error::Error + Send + Sync>),

    /// The remote service call failed.
    #[error("catalog request failed: {0}")]
    Remote(Arc<dyn std::error::Error + Send + Sync>),
}

impl CatalogError {
    /// Wraps a data-quality error from a remote payload.
    pub fn invalid_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidData(Arc::new(err))
    }

    /// Wraps a remote service error.
    pub fn remote(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Remote(Arc::new(err))
    }
}
