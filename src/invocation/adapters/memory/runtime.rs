//! Scripted agent runtime for tests and offline demos.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::invocation::{
    domain::{CompletionEvent, InvocationRequest},
    ports::{AgentRuntime, CompletionStream, RuntimeError, RuntimeResult},
};
use crate::registry::domain::AgentId;

/// One step of a scripted completion stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    /// Emit a text chunk.
    Text(String),
    /// Emit raw chunk bytes.
    Bytes(Vec<u8>),
    /// Emit a trace event.
    Trace(Value),
    /// Fail the stream with the given message; later steps are not emitted.
    Fail(String),
    /// Never produce another event.
    Stall,
}

/// In-memory runtime replaying a fixed script per agent.
///
/// Every opened session is recorded so tests can inspect the requests that
/// reached the runtime.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAgentRuntime {
    state: Arc<RwLock<ScriptedRuntimeState>>,
}

#[derive(Debug, Default)]
struct ScriptedRuntimeState {
    scripts: HashMap<AgentId, Vec<ScriptStep>>,
    requests: Vec<InvocationRequest>,
}

impl ScriptedAgentRuntime {
    /// Creates a runtime with no scripts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the script replayed for every session opened with an agent.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Remote`] when lock acquisition fails.
    pub fn set_script(&self, agent_id: AgentId, steps: Vec<ScriptStep>) -> RuntimeResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| RuntimeError::remote(std::io::Error::other(err.to_string())))?;
        state.scripts.insert(agent_id, steps);
        Ok(())
    }

    /// Returns every request received so far, in order.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Remote`] when lock acquisition fails.
    pub fn requests(&self) -> RuntimeResult<Vec<InvocationRequest>> {
        let state = self
            .state
            .read()
            .map_err(|err| RuntimeError::remote(std::io::Error::other(err.to_string())))?;
        Ok(state.requests.clone())
    }
}

fn script_stream(steps: Vec<ScriptStep>) -> CompletionStream {
    let mut events: Vec<RuntimeResult<CompletionEvent>> = Vec::with_capacity(steps.len());
    let mut stalls = false;
    for step in steps {
        match step {
            ScriptStep::Text(text) => events.push(Ok(CompletionEvent::text(text))),
            ScriptStep::Bytes(bytes) => events.push(Ok(CompletionEvent::Chunk(bytes))),
            ScriptStep::Trace(trace) => events.push(Ok(CompletionEvent::Trace(trace))),
            ScriptStep::Fail(message) => {
                events.push(Err(RuntimeError::remote(std::io::Error::other(message))));
                break;
            }
            ScriptStep::Stall => {
                stalls = true;
                break;
            }
        }
    }

    let scripted = stream::iter(events);
    if stalls {
        scripted.chain(stream::pending()).boxed()
    } else {
        scripted.boxed()
    }
}

#[async_trait]
impl AgentRuntime for ScriptedAgentRuntime {
    async fn invoke_agent(&self, request: &InvocationRequest) -> RuntimeResult<CompletionStream> {
        let mut state = self
            .state
            .write()
            .map_err(|err| RuntimeError::remote(std::io::Error::other(err.to_string())))?;
        state.requests.push(request.clone());
        let steps = state
            .scripts
            .get(&request.agent_id)
            .cloned()
            .ok_or_else(|| RuntimeError::NotFound {
                agent_id: request.agent_id.clone(),
                alias_id: request.alias_id.clone(),
            })?;
        Ok(script_stream(steps))
    }
}
