//! Agent lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state reported by the hosting service for an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    /// The agent is being created.
    Creating,
    /// The agent is prepared and can serve requests.
    Active,
    /// Creation or preparation failed.
    Failed,
    /// The agent is being deleted.
    Deleting,
    /// The agent is being updated, prepared, or versioned.
    Updating,
    /// The service reported a state this crate does not recognise.
    Unknown,
}

impl AgentStatus {
    /// Parses a remote lifecycle string.
    ///
    /// Matching ignores case and surrounding whitespace. Unrecognised values
    /// map to [`AgentStatus::Unknown`] rather than failing, since the status
    /// is informational and must never block a registry refresh.
    #[must_use]
    pub fn from_remote(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "creating" => Self::Creating,
            "active" | "prepared" => Self::Active,
            "failed" => Self::Failed,
            "deleting" => Self::Deleting,
            "updating" | "preparing" | "versioning" | "not_prepared" => Self::Updating,
            _ => Self::Unknown,
        }
    }

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Creating => "creating",
            Self::Active => "active",
            Self::Failed => "failed",
            Self::Deleting => "deleting",
            Self::Updating => "updating",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
