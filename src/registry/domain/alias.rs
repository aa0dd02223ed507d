//! Routing aliases and default alias resolution.

use super::AliasId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named routing pointer to one deployed snapshot of an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRecord {
    id: AliasId,
    name: String,
    updated_at: DateTime<Utc>,
}

impl AliasRecord {
    /// Creates an alias record.
    #[must_use]
    pub fn new(id: AliasId, name: impl Into<String>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            updated_at,
        }
    }

    /// Returns the alias identifier.
    #[must_use]
    pub const fn id(&self) -> &AliasId {
        &self.id
    }

    /// Returns the alias display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns when the alias was last updated.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Picks the alias used to invoke an agent.
///
/// The most recently updated alias wins. Aliases sharing the latest
/// timestamp are ordered by identifier and the greatest identifier wins, so
/// the result does not depend on listing order. Returns `None` when there
/// are no aliases.
#[must_use]
pub fn resolve_default_alias(aliases: &[AliasRecord]) -> Option<AliasId> {
    aliases
        .iter()
        .max_by(|left, right| {
            left.updated_at
                .cmp(&right.updated_at)
                .then_with(|| left.id.cmp(&right.id))
        })
        .map(|alias| alias.id.clone())
}
