//! Immutable registry snapshots.

use super::{AgentId, AgentRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Records an agent that could not be loaded during a refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentLoadFailure {
    /// Identifier of the agent that failed to load.
    pub agent_id: AgentId,
    /// Human-readable failure description.
    pub reason: String,
}

/// A complete view of the registry as of one refresh.
///
/// Snapshots are never mutated after publication. Readers holding an older
/// snapshot keep a consistent view while a refresh builds its replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    agents: Vec<AgentRecord>,
    failures: Vec<AgentLoadFailure>,
    loaded_at: DateTime<Utc>,
}

impl RegistrySnapshot {
    /// Creates a snapshot from loaded agents and isolated failures.
    #[must_use]
    pub const fn new(
        agents: Vec<AgentRecord>,
        failures: Vec<AgentLoadFailure>,
        loaded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            agents,
            failures,
            loaded_at,
        }
    }

    /// Returns the loaded agents in listing order.
    #[must_use]
    pub fn agents(&self) -> &[AgentRecord] {
        &self.agents
    }

    /// Returns the agents that failed to load.
    #[must_use]
    pub fn failures(&self) -> &[AgentLoadFailure] {
        &self.failures
    }

    /// Returns when the snapshot was assembled.
    #[must_use]
    pub const fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Returns whether every listed agent loaded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns whether the snapshot holds no agents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Finds an agent by identifier.
    #[must_use]
    pub fn find(&self, agent_id: &AgentId) -> Option<&AgentRecord> {
        self.agents.iter().find(|agent| agent.id() == agent_id)
    }
}
