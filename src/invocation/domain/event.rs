//! Invocation requests and streamed completion events.

use super::SessionId;
use crate::registry::domain::{AgentId, AliasId};
use serde_json::Value;

/// Parameter object for opening an invocation session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    /// Agent to invoke.
    pub agent_id: AgentId,
    /// Alias routing the request to a deployed agent snapshot.
    pub alias_id: AliasId,
    /// Fresh session identifier.
    pub session_id: SessionId,
    /// Query text sent to the agent.
    pub input_text: String,
}

/// One event from an agent's completion stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionEvent {
    /// A fragment of the answer, as raw UTF-8 bytes.
    Chunk(Vec<u8>),
    /// Diagnostic trace data; never part of the answer text.
    Trace(Value),
}

impl CompletionEvent {
    /// Creates a chunk event from text.
    #[must_use]
    pub fn text(fragment: impl Into<String>) -> Self {
        Self::Chunk(fragment.into().into_bytes())
    }
}
