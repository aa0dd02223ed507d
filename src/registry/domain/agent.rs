//! Agent record assembled from remote detail and alias listings.

use super::{AgentId, AgentStatus, AliasId, AliasRecord, resolve_default_alias};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parameter object describing one agent as returned by the detail lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDetail {
    /// Remote agent identifier.
    pub id: AgentId,
    /// Display name.
    pub name: String,
    /// Free-text capability description used for semantic matching.
    pub instructions: String,
    /// Lifecycle status.
    pub status: AgentStatus,
    /// Identifier of the underlying generative model.
    pub foundation_model: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// One registered agent together with its routing aliases.
///
/// The default alias is derived once at construction and never drifts from
/// the alias list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecord {
    id: AgentId,
    name: String,
    instructions: String,
    status: AgentStatus,
    foundation_model: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    aliases: Vec<AliasRecord>,
    default_alias_id: Option<AliasId>,
}

impl AgentRecord {
    /// Assembles a record from agent detail and its aliases.
    #[must_use]
    pub fn new(detail: AgentDetail, aliases: Vec<AliasRecord>) -> Self {
        let AgentDetail {
            id,
            name,
            instructions,
            status,
            foundation_model,
            created_at,
            updated_at,
        } = detail;
        let default_alias_id = resolve_default_alias(&aliases);
        Self {
            id,
            name,
            instructions,
            status,
            foundation_model,
            created_at,
            updated_at,
            aliases,
            default_alias_id,
        }
    }

    /// Returns the agent identifier.
    #[must_use]
    pub const fn id(&self) -> &AgentId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the capability description.
    #[must_use]
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> AgentStatus {
        self.status
    }

    /// Returns the foundation model identifier.
    #[must_use]
    pub fn foundation_model(&self) -> &str {
        &self.foundation_model
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the aliases in listing order.
    #[must_use]
    pub fn aliases(&self) -> &[AliasRecord] {
        &self.aliases
    }

    /// Returns the alias used for invocation, or `None` when the agent has
    /// no aliases.
    #[must_use]
    pub const fn default_alias_id(&self) -> Option<&AliasId> {
        self.default_alias_id.as_ref()
    }

    /// Returns whether the agent owns the given alias.
    #[must_use]
    pub fn has_alias(&self, alias_id: &AliasId) -> bool {
        self.aliases.iter().any(|alias| alias.id() == alias_id)
    }
}
