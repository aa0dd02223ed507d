//! The agent selector facade.

use super::config::SelectorConfig;
use super::error::{AnswerError, InvokeError, SelectorResult};
use crate::embedding::ports::TextEmbedder;
use crate::embedding::services::{AgentEmbeddingCache, EmbeddingProvider};
use crate::invocation::domain::AgentResponse;
use crate::invocation::ports::AgentRuntime;
use crate::invocation::services::AgentInvoker;
use crate::ranking::{self, NoMatchReason, Selection};
use crate::registry::domain::{AgentRecord, AliasId, RegistrySnapshot};
use crate::registry::ports::AgentCatalog;
use crate::registry::services::{RegistryCache, RegistryCacheError};
use mockable::Clock;
use std::sync::Arc;
use tracing::{info, warn};

/// Routes natural-language queries to the best registered agent.
///
/// Owns the registry cache and the agent embedding cache; both are shared
/// by every call made through the same selector, so a selector is normally
/// created once and wrapped in an [`Arc`].
pub struct AgentSelector<C, E, R, K>
where
    C: AgentCatalog,
    E: TextEmbedder,
    R: AgentRuntime,
    K: Clock + Send + Sync,
{
    config: SelectorConfig,
    registry: RegistryCache<C, K>,
    embeddings: EmbeddingProvider<E>,
    agent_embeddings: AgentEmbeddingCache,
    invoker: AgentInvoker<R>,
}

impl<C, E, R, K> AgentSelector<C, E, R, K>
where
    C: AgentCatalog,
    E: TextEmbedder,
    R: AgentRuntime,
    K: Clock + Send + Sync,
{
    /// Creates a selector over the given collaborators.
    #[must_use]
    pub fn new(
        catalog: Arc<C>,
        embedder: Arc<E>,
        runtime: Arc<R>,
        clock: Arc<K>,
        config: SelectorConfig,
    ) -> Self {
        Self {
            registry: RegistryCache::new(catalog, clock, config.fetch_concurrency),
            embeddings: EmbeddingProvider::new(embedder, config.embedding_dimension),
            agent_embeddings: AgentEmbeddingCache::new(),
            invoker: AgentInvoker::new(runtime, config.stream_timeout()),
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Reloads the registry and drops cached agent embeddings.
    ///
    /// # Errors
    ///
    /// Returns [`super::SelectorError`] when the agent listing fails or any
    /// agent fails to load. The previously published snapshot and
    /// embeddings are kept in that case.
    pub async fn refresh(&self) -> SelectorResult<Arc<RegistrySnapshot>> {
        let snapshot = self.registry.refresh().await?;
        self.agent_embeddings.clear()?;
        Ok(snapshot)
    }

    /// Returns the current registry, loading it on first use or when
    /// `force_refresh` is set.
    ///
    /// # Errors
    ///
    /// Returns [`super::SelectorError`] when a required load fails.
    pub async fn list_agents(&self, force_refresh: bool) -> SelectorResult<Arc<RegistrySnapshot>> {
        if force_refresh {
            return self.refresh().await;
        }
        Ok(self.registry.list_agents(false).await?)
    }

    /// Picks the agent whose instructions best match `query`.
    ///
    /// The registry is loaded if absent, agents without a cached embedding
    /// are embedded, and the query is embedded once. Embedding failures
    /// degrade to zero vectors rather than failing the call. When no
    /// registry has been published yet and some agents fail to load, the
    /// agents that did load are ranked for this call only.
    ///
    /// # Errors
    ///
    /// Returns [`super::SelectorError`] when the registry cannot be loaded,
    /// when no listed agent loaded, or when the embedding cache is unusable.
    pub async fn select_agent(&self, query: &str) -> SelectorResult<Selection> {
        let snapshot = self.registry_for_selection().await?;
        if snapshot.is_empty() {
            info!("agent registry is empty");
            return Ok(Selection::NoMatch(NoMatchReason::EmptyRegistry));
        }

        let vectors = self
            .agent_embeddings
            .vectors_for(
                snapshot.agents(),
                &self.embeddings,
                self.config.fetch_concurrency,
            )
            .await?;
        let query_embedding = self.embeddings.embed(query).await;
        if query_embedding.is_degraded() {
            warn!("query embedding degraded; all agents will score zero");
        }

        let candidates = snapshot.agents().iter().cloned().zip(vectors);
        let selection = ranking::select(
            query_embedding.vector(),
            candidates,
            self.config.min_score,
        );
        match &selection {
            Selection::Matched(matched) => info!(
                agent_id = %matched.agent().id(),
                agent_name = matched.agent().name(),
                score = matched.score(),
                "selected agent"
            ),
            Selection::NoMatch(reason) => info!(%reason, "no agent selected"),
        }
        Ok(selection)
    }

    async fn registry_for_selection(&self) -> SelectorResult<Arc<RegistrySnapshot>> {
        match self.registry.list_agents(false).await {
            Err(RegistryCacheError::Incomplete(partial)) if !partial.is_empty() => {
                warn!(
                    agents = partial.agents().len(),
                    failures = partial.failures().len(),
                    "ranking a partially loaded registry"
                );
                Ok(partial)
            }
            result => Ok(result?),
        }
    }

    /// Invokes `agent` through its default alias.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::NotInvocable`] when the agent has no alias,
    /// otherwise any [`InvokeError::Invocation`] raised by the call.
    pub async fn invoke_selected(
        &self,
        agent: &AgentRecord,
        query: &str,
    ) -> Result<AgentResponse, InvokeError> {
        let alias_id =
            default_alias(agent).ok_or_else(|| InvokeError::NotInvocable(agent.id().clone()))?;
        Ok(self.invoker.invoke(agent, alias_id, query).await?)
    }

    /// Invokes `agent` through an explicitly chosen alias.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::UnknownAlias`] when `alias_id` does not belong
    /// to the agent, otherwise any [`InvokeError::Invocation`] raised by
    /// the call.
    pub async fn invoke_alias(
        &self,
        agent: &AgentRecord,
        alias_id: &AliasId,
        query: &str,
    ) -> Result<AgentResponse, InvokeError> {
        if !agent.has_alias(alias_id) {
            return Err(InvokeError::UnknownAlias {
                agent_id: agent.id().clone(),
                alias_id: alias_id.clone(),
            });
        }
        Ok(self.invoker.invoke(agent, alias_id, query).await?)
    }

    /// Selects the best agent for `query` and returns its answer.
    ///
    /// # Errors
    ///
    /// Returns an [`AnswerError`] describing which step ended the call; use
    /// [`AnswerError::user_message`] for text fit to show the caller.
    pub async fn answer_query(&self, query: &str) -> Result<AgentResponse, AnswerError> {
        let matched = match self.select_agent(query).await? {
            Selection::Matched(matched) => matched,
            Selection::NoMatch(reason) => return Err(AnswerError::NoSuitableAgent(reason)),
        };
        let agent = matched.agent();
        let alias_id =
            default_alias(agent).ok_or_else(|| AnswerError::NotInvocable(agent.id().clone()))?;
        Ok(self.invoker.invoke(agent, alias_id, query).await?)
    }
}

fn default_alias(agent: &AgentRecord) -> Option<&AliasId> {
    let alias_id = agent.default_alias_id();
    if alias_id.is_none() {
        warn!(agent_id = %agent.id(), "agent has no alias");
    }
    alias_id
}
