//! Error types for registry domain validation.

use thiserror::Error;

/// Errors returned while constructing registry domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryDomainError {
    /// The agent identifier is empty after trimming.
    #[error("agent identifier must not be empty")]
    EmptyAgentId,

    /// The agent identifier exceeds the 100-character limit.
    #[error("agent identifier exceeds 100 character limit: {0}")]
    AgentIdTooLong(String),

    /// The alias identifier is empty after trimming.
    #[error("alias identifier must not be empty")]
    EmptyAliasId,

    /// The alias identifier exceeds the 100-character limit.
    #[error("alias identifier exceeds 100 character limit: {0}")]
    AliasIdTooLong(String),
}
