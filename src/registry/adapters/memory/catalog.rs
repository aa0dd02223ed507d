//! In-memory agent catalog for tests and offline selection flows.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::registry::{
    domain::{AgentDetail, AgentId, AliasRecord},
    ports::{AgentCatalog, AgentSummary, AliasPage, CatalogError, CatalogResult, SummaryPage},
};

/// Default number of entries returned per page.
const DEFAULT_PAGE_SIZE: usize = 10;

/// Thread-safe in-memory catalog.
///
/// Agents are listed in insertion order and split into pages of a
/// configurable size, so callers exercise the same pagination path as
/// against a remote service. Individual agents, or the listing itself, can
/// be marked as failing to model partial outages.
#[derive(Debug, Clone)]
pub struct InMemoryAgentCatalog {
    state: Arc<RwLock<InMemoryCatalogState>>,
    calls: Arc<CallCounters>,
}

#[derive(Debug)]
struct InMemoryCatalogState {
    agents: Vec<(AgentDetail, Vec<AliasRecord>)>,
    page_size: usize,
    failing_agents: HashSet<AgentId>,
    listing_fails: bool,
}

#[derive(Debug, Default)]
struct CallCounters {
    list_agents: AtomicUsize,
    get_agent: AtomicUsize,
    list_agent_aliases: AtomicUsize,
}

impl Default for InMemoryAgentCatalog {
    fn default() -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryCatalogState {
                agents: Vec::new(),
                page_size: DEFAULT_PAGE_SIZE,
                failing_agents: HashSet::new(),
                listing_fails: false,
            })),
            calls: Arc::new(CallCounters::default()),
        }
    }
}

impl InMemoryAgentCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of entries returned per page (minimum one).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Remote`] when lock acquisition fails.
    pub fn set_page_size(&self, page_size: usize) -> CatalogResult<()> {
        let mut state = self.write_state()?;
        state.page_size = page_size.max(1);
        Ok(())
    }

    /// Adds or replaces an agent and its aliases.
    ///
    /// Replacing keeps the agent's original listing position.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Remote`] when lock acquisition fails.
    pub fn upsert_agent(&self, detail: AgentDetail, aliases: Vec<AliasRecord>) -> CatalogResult<()> {
        let mut state = self.write_state()?;
        if let Some(entry) = state
            .agents
            .iter_mut()
            .find(|(existing, _)| existing.id == detail.id)
        {
            *entry = (detail, aliases);
        } else {
            state.agents.push((detail, aliases));
        }
        Ok(())
    }

    /// Removes an agent from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Remote`] when lock acquisition fails.
    pub fn remove_agent(&self, agent_id: &AgentId) -> CatalogResult<()> {
        let mut state = self.write_state()?;
        state.agents.retain(|(detail, _)| detail.id != *agent_id);
        Ok(())
    }

    /// Makes detail and alias lookups for an agent fail.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Remote`] when lock acquisition fails.
    pub fn fail_agent(&self, agent_id: AgentId) -> CatalogResult<()> {
        let mut state = self.write_state()?;
        state.failing_agents.insert(agent_id);
        Ok(())
    }

    /// Makes the paged agent listing fail or succeed.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Remote`] when lock acquisition fails.
    pub fn set_listing_fails(&self, fails: bool) -> CatalogResult<()> {
        let mut state = self.write_state()?;
        state.listing_fails = fails;
        Ok(())
    }

    /// Returns how many listing pages have been requested.
    #[must_use]
    pub fn list_agents_calls(&self) -> usize {
        self.calls.list_agents.load(Ordering::SeqCst)
    }

    /// Returns how many detail lookups have been requested.
    #[must_use]
    pub fn get_agent_calls(&self) -> usize {
        self.calls.get_agent.load(Ordering::SeqCst)
    }

    /// Returns how many alias pages have been requested.
    #[must_use]
    pub fn list_agent_aliases_calls(&self) -> usize {
        self.calls.list_agent_aliases.load(Ordering::SeqCst)
    }

    fn read_state(&self) -> CatalogResult<std::sync::RwLockReadGuard<'_, InMemoryCatalogState>> {
        self.state
            .read()
            .map_err(|err| CatalogError::remote(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> CatalogResult<std::sync::RwLockWriteGuard<'_, InMemoryCatalogState>> {
        self.state
            .write()
            .map_err(|err| CatalogError::remote(std::io::Error::other(err.to_string())))
    }

    fn ensure_agent_available(state: &InMemoryCatalogState, agent_id: &AgentId) -> CatalogResult<()> {
        if state.failing_agents.contains(agent_id) {
            return Err(CatalogError::remote(std::io::Error::other(format!(
                "simulated failure for agent {agent_id}"
            ))));
        }
        Ok(())
    }
}

/// Parses an offset page token produced by this adapter.
fn parse_offset(page_token: Option<&str>) -> CatalogResult<usize> {
    page_token.map_or(Ok(0), |token| {
        token.parse::<usize>().map_err(CatalogError::invalid_data)
    })
}

/// Returns the page window and the token for the following page.
fn page_window(total: usize, offset: usize, page_size: usize) -> (usize, usize, Option<String>) {
    let start = offset.min(total);
    let end = start.saturating_add(page_size).min(total);
    let next_token = (end < total).then(|| end.to_string());
    (start, end, next_token)
}

#[async_trait]
impl AgentCatalog for InMemoryAgentCatalog {
    async fn list_agents(&self, page_token: Option<String>) -> CatalogResult<SummaryPage> {
        self.calls.list_agents.fetch_add(1, Ordering::SeqCst);
        let state = self.read_state()?;
        if state.listing_fails {
            return Err(CatalogError::remote(std::io::Error::other(
                "simulated listing failure",
            )));
        }

        let offset = parse_offset(page_token.as_deref())?;
        let (start, end, next_token) = page_window(state.agents.len(), offset, state.page_size);
        let summaries = state
            .agents
            .get(start..end)
            .unwrap_or_default()
            .iter()
            .map(|(detail, _)| AgentSummary {
                id: detail.id.clone(),
                name: detail.name.clone(),
            })
            .collect();
        Ok(SummaryPage {
            summaries,
            next_token,
        })
    }

    async fn get_agent(&self, agent_id: &AgentId) -> CatalogResult<AgentDetail> {
        self.calls.get_agent.fetch_add(1, Ordering::SeqCst);
        let state = self.read_state()?;
        Self::ensure_agent_available(&state, agent_id)?;
        state
            .agents
            .iter()
            .find(|(detail, _)| detail.id == *agent_id)
            .map(|(detail, _)| detail.clone())
            .ok_or_else(|| CatalogError::NotFound(agent_id.clone()))
    }

    async fn list_agent_aliases(
        &self,
        agent_id: &AgentId,
        page_token: Option<String>,
    ) -> CatalogResult<AliasPage> {
        self.calls.list_agent_aliases.fetch_add(1, Ordering::SeqCst);
        let state = self.read_state()?;
        Self::ensure_agent_available(&state, agent_id)?;
        let aliases = state
            .agents
            .iter()
            .find(|(detail, _)| detail.id == *agent_id)
            .map(|(_, aliases)| aliases)
            .ok_or_else(|| CatalogError::NotFound(agent_id.clone()))?;

        let offset = parse_offset(page_token.as_deref())?;
        let (start, end, next_token) = page_window(aliases.len(), offset, state.page_size);
        Ok(AliasPage {
            aliases: aliases.get(start..end).unwrap_or_default().to_vec(),
            next_token,
        })
    }
}
