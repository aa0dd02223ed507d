//! Registry cache with atomic snapshot publication.
//!
//! [`RegistryCache`] drains the catalog's paged listing, loads detail and
//! aliases for every agent with bounded concurrency, and publishes the
//! assembled [`RegistrySnapshot`] by swapping a single pointer. Readers never
//! observe a partially built registry. A load in which any agent failed is
//! never published; the failures are reported alongside the agents that did
//! load, and the previously published snapshot stays in place.

use crate::registry::{
    domain::{AgentId, AgentLoadFailure, AgentRecord, AliasRecord, RegistrySnapshot},
    ports::{AgentCatalog, AgentSummary, CatalogError, CatalogResult},
};
use futures::stream::{self, StreamExt};
use mockable::Clock;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Service-level errors for registry cache operations.
#[derive(Debug, Error)]
pub enum RegistryCacheError {
    /// Paging through the agent listing failed; the previous snapshot is
    /// kept.
    #[error("agent listing failed: {0}")]
    Listing(#[from] CatalogError),

    /// At least one listed agent could not be loaded; nothing was
    /// published. The partial snapshot carries the loaded agents and the
    /// per-agent failures.
    #[error("registry load incomplete: {} agent(s) failed to load", .0.failures().len())]
    Incomplete(Arc<RegistrySnapshot>),

    /// The shared snapshot slot could not be accessed.
    #[error("registry snapshot lock poisoned: {0}")]
    State(String),
}

/// Result type for registry cache operations.
pub type RegistryCacheResult<T> = Result<T, RegistryCacheError>;

/// Process-local cache of the agent registry.
pub struct RegistryCache<C, K>
where
    C: AgentCatalog,
    K: Clock + Send + Sync,
{
    catalog: Arc<C>,
    clock: Arc<K>,
    fetch_concurrency: usize,
    current: RwLock<Option<Arc<RegistrySnapshot>>>,
    refresh_gate: Mutex<()>,
}

impl<C, K> RegistryCache<C, K>
where
    C: AgentCatalog,
    K: Clock + Send + Sync,
{
    /// Creates an empty cache.
    ///
    /// `fetch_concurrency` bounds the number of in-flight per-agent lookups
    /// during a refresh; zero is treated as one.
    #[must_use]
    pub fn new(catalog: Arc<C>, clock: Arc<K>, fetch_concurrency: usize) -> Self {
        Self {
            catalog,
            clock,
            fetch_concurrency: fetch_concurrency.max(1),
            current: RwLock::new(None),
            refresh_gate: Mutex::new(()),
        }
    }

    /// Returns the registry, loading it when required.
    ///
    /// With `force_refresh` unset, a cached snapshot is returned unchanged
    /// and no remote calls are made. Otherwise the registry is rebuilt and,
    /// when every listed agent loaded, published before being returned.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryCacheError::Listing`] when paging through the agent
    /// listing fails, [`RegistryCacheError::Incomplete`] when any agent
    /// failed to load, or [`RegistryCacheError::State`] when the snapshot
    /// slot is poisoned. The published snapshot is unchanged in every error
    /// case.
    pub async fn list_agents(&self, force_refresh: bool) -> RegistryCacheResult<Arc<RegistrySnapshot>> {
        if !force_refresh && let Some(snapshot) = self.snapshot()? {
            return Ok(snapshot);
        }

        let _gate = self.refresh_gate.lock().await;
        // A concurrent caller may have loaded the registry while we waited.
        if !force_refresh && let Some(snapshot) = self.snapshot()? {
            return Ok(snapshot);
        }

        let snapshot = Arc::new(self.load().await?);
        if !snapshot.is_complete() {
            warn!(
                agents = snapshot.agents().len(),
                failures = snapshot.failures().len(),
                "registry load incomplete; keeping the published snapshot"
            );
            return Err(RegistryCacheError::Incomplete(snapshot));
        }
        self.publish(Arc::clone(&snapshot))?;
        Ok(snapshot)
    }

    /// Rebuilds and publishes the registry unconditionally.
    ///
    /// # Errors
    ///
    /// See [`RegistryCache::list_agents`].
    pub async fn refresh(&self) -> RegistryCacheResult<Arc<RegistrySnapshot>> {
        self.list_agents(true).await
    }

    /// Returns the cached snapshot without contacting the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryCacheError::State`] when the snapshot slot is
    /// poisoned.
    pub fn snapshot(&self) -> RegistryCacheResult<Option<Arc<RegistrySnapshot>>> {
        let current = self
            .current
            .read()
            .map_err(|err| RegistryCacheError::State(err.to_string()))?;
        Ok(current.clone())
    }

    /// Drops the cached snapshot so the next lookup reloads it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryCacheError::State`] when the snapshot slot is
    /// poisoned.
    pub fn invalidate(&self) -> RegistryCacheResult<()> {
        let mut current = self
            .current
            .write()
            .map_err(|err| RegistryCacheError::State(err.to_string()))?;
        *current = None;
        Ok(())
    }

    fn publish(&self, snapshot: Arc<RegistrySnapshot>) -> RegistryCacheResult<()> {
        let mut current = self
            .current
            .write()
            .map_err(|err| RegistryCacheError::State(err.to_string()))?;
        info!(agents = snapshot.agents().len(), "published registry snapshot");
        *current = Some(snapshot);
        Ok(())
    }

    async fn load(&self) -> RegistryCacheResult<RegistrySnapshot> {
        let summaries = self.list_all_summaries().await?;
        let outcomes: Vec<(AgentId, CatalogResult<AgentRecord>)> = stream::iter(summaries)
            .map(|summary| self.load_agent(summary))
            .buffered(self.fetch_concurrency)
            .collect()
            .await;

        let mut agents = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();
        for (agent_id, outcome) in outcomes {
            match outcome {
                Ok(record) => agents.push(record),
                Err(err) => {
                    warn!(agent_id = %agent_id, error = %err, "failed to load agent");
                    failures.push(AgentLoadFailure {
                        agent_id,
                        reason: err.to_string(),
                    });
                }
            }
        }

        Ok(RegistrySnapshot::new(agents, failures, self.clock.utc()))
    }

    /// Drains every listing page, dropping repeated agent identifiers.
    async fn list_all_summaries(&self) -> CatalogResult<Vec<AgentSummary>> {
        let mut summaries = Vec::new();
        let mut seen = HashSet::new();
        let mut seen_tokens = HashSet::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.catalog.list_agents(page_token.clone()).await?;
            debug!(entries = page.summaries.len(), "fetched agent listing page");
            for summary in page.summaries {
                if seen.insert(summary.id.clone()) {
                    summaries.push(summary);
                } else {
                    warn!(agent_id = %summary.id, "agent listed more than once; keeping the first entry");
                }
            }

            match page.next_token {
                Some(token) if !seen_tokens.insert(token.clone()) => {
                    return Err(CatalogError::invalid_data(std::io::Error::other(format!(
                        "agent listing repeated page token {token}"
                    ))));
                }
                Some(token) => page_token = Some(token),
                None => return Ok(summaries),
            }
        }
    }

    async fn load_agent(&self, summary: AgentSummary) -> (AgentId, CatalogResult<AgentRecord>) {
        let outcome = self.fetch_record(&summary.id).await;
        (summary.id, outcome)
    }

    async fn fetch_record(&self, agent_id: &AgentId) -> CatalogResult<AgentRecord> {
        let detail = self.catalog.get_agent(agent_id).await?;
        let aliases = self.list_all_aliases(agent_id).await?;
        debug!(agent_id = %agent_id, aliases = aliases.len(), "loaded agent");
        Ok(AgentRecord::new(detail, aliases))
    }

    async fn list_all_aliases(&self, agent_id: &AgentId) -> CatalogResult<Vec<AliasRecord>> {
        let mut aliases = Vec::new();
        let mut seen_tokens = HashSet::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self
                .catalog
                .list_agent_aliases(agent_id, page_token.clone())
                .await?;
            aliases.extend(page.aliases);

            match page.next_token {
                Some(token) if !seen_tokens.insert(token.clone()) => {
                    return Err(CatalogError::invalid_data(std::io::Error::other(format!(
                        "alias listing for agent {agent_id} repeated page token {token}"
                    ))));
                }
                Some(token) => page_token = Some(token),
                None => return Ok(aliases),
            }
        }
    }
}
