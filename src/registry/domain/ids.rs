//! Identifier types for the registry domain.

use super::RegistryDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length accepted for remote identifiers.
const MAX_ID_LENGTH: usize = 100;

/// Opaque identifier assigned to an agent by the hosting service.
///
/// Identifiers are stable across calls and unique within a registry
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    /// Creates a validated agent identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryDomainError::EmptyAgentId`] when the value is blank
    /// or [`RegistryDomainError::AgentIdTooLong`] when it exceeds 100
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, RegistryDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(RegistryDomainError::EmptyAgentId);
        }
        if normalized.chars().count() > MAX_ID_LENGTH {
            return Err(RegistryDomainError::AgentIdTooLong(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AgentId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identifier of a routing alias owned by one agent.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasId(String);

impl AliasId {
    /// Creates a validated alias identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryDomainError::EmptyAliasId`] when the value is blank
    /// or [`RegistryDomainError::AliasIdTooLong`] when it exceeds 100
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, RegistryDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(RegistryDomainError::EmptyAliasId);
        }
        if normalized.chars().count() > MAX_ID_LENGTH {
            return Err(RegistryDomainError::AliasIdTooLong(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AliasId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AliasId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
