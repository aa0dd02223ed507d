//! Runtime port for the hosting service's invoke API.

use crate::invocation::domain::{CompletionEvent, InvocationRequest};
use crate::registry::domain::{AgentId, AliasId};
use async_trait::async_trait;
use futures::stream::BoxStream;
use std::sync::Arc;
use thiserror::Error;

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Completion stream returned by an opened session.
///
/// The stream ends when the agent has finished answering. An `Err` item
/// signals a mid-stream failure.
pub type CompletionStream = BoxStream<'static, RuntimeResult<CompletionEvent>>;

/// Opens streaming invocation sessions with hosted agents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AgentRuntime: Send + Sync {
    /// Opens a session and returns its completion stream.
    async fn invoke_agent(&self, request: &InvocationRequest) -> RuntimeResult<CompletionStream>;
}

/// Errors returned by runtime adapters.
#[derive(Debug, Clone, Error)]
pub enum RuntimeError {
    /// The agent or alias does not exist.
    #[error("agent {agent_id} has no alias {alias_id}")]
    NotFound {
        /// Requested agent.
        agent_id: AgentId,
        /// Requested alias.
        alias_id: AliasId,
    },

    /// The remote service call failed.
    #[error("agent runtime error: {0}")]
    Remote(Arc<dyn std::error::Error + Send + Sync>),
}

impl RuntimeError {
    /// Wraps a remote service error.
    pub fn remote(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Remote(Arc::new(err))
    }
}
