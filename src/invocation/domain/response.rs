//! Accumulated agent responses.

use super::SessionId;
use crate::registry::domain::{AgentId, AliasId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The complete answer produced by one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResponse {
    text: String,
    agent_id: AgentId,
    alias_id: AliasId,
    session_id: SessionId,
    traces: Vec<Value>,
}

impl AgentResponse {
    /// Creates a response.
    #[must_use]
    pub const fn new(
        text: String,
        agent_id: AgentId,
        alias_id: AliasId,
        session_id: SessionId,
        traces: Vec<Value>,
    ) -> Self {
        Self {
            text,
            agent_id,
            alias_id,
            session_id,
            traces,
        }
    }

    /// Returns the answer text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the response and returns the answer text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Returns the agent that answered.
    #[must_use]
    pub const fn agent_id(&self) -> &AgentId {
        &self.agent_id
    }

    /// Returns the alias used for the invocation.
    #[must_use]
    pub const fn alias_id(&self) -> &AliasId {
        &self.alias_id
    }

    /// Returns the session the answer was produced in.
    #[must_use]
    pub const fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Returns trace events in arrival order.
    #[must_use]
    pub fn traces(&self) -> &[Value] {
        &self.traces
    }
}
