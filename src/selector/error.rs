//! Error types for the selector facade.

use crate::embedding::services::EmbeddingCacheError;
use crate::invocation::services::InvocationError;
use crate::ranking::NoMatchReason;
use crate::registry::domain::{AgentId, AliasId};
use crate::registry::services::RegistryCacheError;
use thiserror::Error;

/// Errors raised while obtaining the registry or ranking agents.
#[derive(Debug, Error)]
pub enum SelectorError {
    /// The registry could not be loaded.
    #[error(transparent)]
    Registry(#[from] RegistryCacheError),
    /// The embedding cache could not be accessed.
    #[error(transparent)]
    Embeddings(#[from] EmbeddingCacheError),
}

/// Result type for selector operations.
pub type SelectorResult<T> = Result<T, SelectorError>;

/// Errors raised while invoking a chosen agent.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The agent has no alias, so there is nothing to route the query to.
    #[error("agent {0} has no alias and cannot be invoked")]
    NotInvocable(AgentId),
    /// The requested alias does not belong to the agent.
    #[error("alias {alias_id} does not belong to agent {agent_id}")]
    UnknownAlias {
        /// Agent being invoked.
        agent_id: AgentId,
        /// Requested alias.
        alias_id: AliasId,
    },
    /// The invocation itself failed.
    #[error(transparent)]
    Invocation(#[from] InvocationError),
}

/// Terminal failure of [`super::AgentSelector::answer_query`].
#[derive(Debug, Error)]
pub enum AnswerError {
    /// The registry or embedding state could not be read.
    #[error(transparent)]
    Selector(#[from] SelectorError),
    /// No agent matched the query.
    #[error("no suitable agent: {0}")]
    NoSuitableAgent(NoMatchReason),
    /// The matched agent has no alias.
    #[error("agent {0} has no alias and cannot be invoked")]
    NotInvocable(AgentId),
    /// The matched agent failed to answer.
    #[error(transparent)]
    Invocation(#[from] InvocationError),
}

impl AnswerError {
    /// Returns a message suitable for showing to the person who asked.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Selector(_) => {
                "The agent registry is unavailable right now. Please try again later."
            }
            Self::NoSuitableAgent(NoMatchReason::EmptyRegistry) => {
                "No agents are available in the registry."
            }
            Self::NoSuitableAgent(_) => "Couldn't find a suitable agent for your query.",
            Self::NotInvocable(_) => {
                "The best matching agent has no deployed alias and cannot answer right now."
            }
            Self::Invocation(_) => {
                "The agent failed to produce a complete answer. Please try again."
            }
        }
    }
}
