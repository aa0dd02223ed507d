//! Per-agent embedding cache.

use crate::embedding::{
    domain::{Embedding, EmbeddingVector},
    ports::TextEmbedder,
    services::EmbeddingProvider,
};
use crate::registry::domain::{AgentId, AgentRecord};
use futures::stream::{self, StreamExt};
use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;
use tracing::debug;

/// Errors returned by the embedding cache.
#[derive(Debug, Error)]
pub enum EmbeddingCacheError {
    /// The cache map could not be accessed.
    #[error("embedding cache lock poisoned: {0}")]
    State(String),
}

/// Result type for embedding cache operations.
pub type EmbeddingCacheResult<T> = Result<T, EmbeddingCacheError>;

#[derive(Debug, Clone)]
struct CachedEmbedding {
    instructions: String,
    vector: EmbeddingVector,
}

/// Caches one instruction embedding per agent.
///
/// Entries are immutable once written. An entry is reused only while the
/// agent's instructions are unchanged; edited instructions are re-embedded
/// on the next lookup. Degraded embeddings are returned for the current call
/// but never cached.
#[derive(Debug, Default)]
pub struct AgentEmbeddingCache {
    entries: RwLock<HashMap<AgentId, CachedEmbedding>>,
}

impl AgentEmbeddingCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns one vector per agent, in the order of `agents`.
    ///
    /// Missing or stale entries are embedded with at most `concurrency`
    /// requests in flight.
    ///
    /// # Errors
    ///
    /// Returns [`EmbeddingCacheError::State`] when the cache lock is
    /// poisoned.
    pub async fn vectors_for<E>(
        &self,
        agents: &[AgentRecord],
        provider: &EmbeddingProvider<E>,
        concurrency: usize,
    ) -> EmbeddingCacheResult<Vec<EmbeddingVector>>
    where
        E: TextEmbedder,
    {
        let mut vectors: Vec<Option<EmbeddingVector>> = {
            let entries = self.read_entries()?;
            agents
                .iter()
                .map(|agent| {
                    entries
                        .get(agent.id())
                        .filter(|cached| cached.instructions == agent.instructions())
                        .map(|cached| cached.vector.clone())
                })
                .collect()
        };

        let missing: Vec<(usize, &AgentRecord)> = agents
            .iter()
            .enumerate()
            .filter(|(index, _)| matches!(vectors.get(*index), Some(None)))
            .collect();
        if !missing.is_empty() {
            debug!(agents = missing.len(), "embedding agent instructions");
        }

        let computed: Vec<(usize, &AgentRecord, Embedding)> = stream::iter(missing)
            .map(|(index, agent)| async move {
                (index, agent, provider.embed(agent.instructions()).await)
            })
            .buffered(concurrency.max(1))
            .boxed()
            .collect()
            .await;

        let mut entries = self.write_entries()?;
        for (index, agent, embedding) in computed {
            let vector = match embedding {
                Embedding::Ready(vector) => {
                    entries.insert(
                        agent.id().clone(),
                        CachedEmbedding {
                            instructions: agent.instructions().to_owned(),
                            vector: vector.clone(),
                        },
                    );
                    vector
                }
                degraded @ Embedding::Degraded { .. } => degraded.into_vector(),
            };
            if let Some(slot) = vectors.get_mut(index) {
                *slot = Some(vector);
            }
        }
        drop(entries);

        Ok(vectors
            .into_iter()
            .map(|vector| vector.unwrap_or_else(|| EmbeddingVector::zeros(provider.dimension())))
            .collect())
    }

    /// Returns the cached vector for an agent, if any.
    ///
    /// # Errors
    ///
    /// Returns [`EmbeddingCacheError::State`] when the cache lock is
    /// poisoned.
    pub fn get(&self, agent_id: &AgentId) -> EmbeddingCacheResult<Option<EmbeddingVector>> {
        Ok(self
            .read_entries()?
            .get(agent_id)
            .map(|cached| cached.vector.clone()))
    }

    /// Returns the number of cached agents.
    ///
    /// # Errors
    ///
    /// Returns [`EmbeddingCacheError::State`] when the cache lock is
    /// poisoned.
    pub fn len(&self) -> EmbeddingCacheResult<usize> {
        Ok(self.read_entries()?.len())
    }

    /// Returns whether the cache holds no entries.
    ///
    /// # Errors
    ///
    /// Returns [`EmbeddingCacheError::State`] when the cache lock is
    /// poisoned.
    pub fn is_empty(&self) -> EmbeddingCacheResult<bool> {
        Ok(self.read_entries()?.is_empty())
    }

    /// Drops every cached entry.
    ///
    /// # Errors
    ///
    /// Returns [`EmbeddingCacheError::State`] when the cache lock is
    /// poisoned.
    pub fn clear(&self) -> EmbeddingCacheResult<()> {
        self.write_entries()?.clear();
        Ok(())
    }

    fn read_entries(
        &self,
    ) -> EmbeddingCacheResult<std::sync::RwLockReadGuard<'_, HashMap<AgentId, CachedEmbedding>>> {
        self.entries
            .read()
            .map_err(|err| EmbeddingCacheError::State(err.to_string()))
    }

    fn write_entries(
        &self,
    ) -> EmbeddingCacheResult<std::sync::RwLockWriteGuard<'_, HashMap<AgentId, CachedEmbedding>>> {
        self.entries
            .write()
            .map_err(|err| EmbeddingCacheError::State(err.to_string()))
    }
}
