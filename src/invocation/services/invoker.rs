//! Service that opens a session and accumulates the streamed answer.

use crate::invocation::{
    domain::{AgentResponse, CompletionEvent, InvocationRequest, SessionId},
    ports::{AgentRuntime, CompletionStream, RuntimeError},
};
use crate::registry::domain::{AgentId, AgentRecord, AliasId};
use futures::StreamExt;
use serde_json::Value;
use std::string::FromUtf8Error;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors returned while invoking an agent.
#[derive(Debug, Error)]
pub enum InvocationError {
    /// The session could not be opened.
    #[error("failed to open a session with agent {agent_id}: {source}")]
    Open {
        /// Agent being invoked.
        agent_id: AgentId,
        /// Runtime failure.
        #[source]
        source: RuntimeError,
    },

    /// The completion stream failed after it was opened; partial output was
    /// discarded.
    #[error("completion stream for session {session_id} failed after {discarded_bytes} bytes: {source}")]
    Stream {
        /// Session whose stream failed.
        session_id: SessionId,
        /// Number of answer bytes received before the failure.
        discarded_bytes: usize,
        /// Runtime failure.
        #[source]
        source: RuntimeError,
    },

    /// The stream did not finish within the configured timeout.
    #[error("session {session_id} did not complete within {timeout:?}")]
    TimedOut {
        /// Session that timed out.
        session_id: SessionId,
        /// Configured timeout.
        timeout: Duration,
    },

    /// The accumulated answer is not valid UTF-8.
    #[error("answer for session {session_id} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        /// Session that produced the answer.
        session_id: SessionId,
        /// Decoding failure.
        #[source]
        source: FromUtf8Error,
    },
}

/// Result type for invocation operations.
pub type InvocationResult<T> = Result<T, InvocationError>;

/// Invokes agents and accumulates their streamed answers.
pub struct AgentInvoker<R>
where
    R: AgentRuntime,
{
    runtime: Arc<R>,
    stream_timeout: Option<Duration>,
}

impl<R> AgentInvoker<R>
where
    R: AgentRuntime,
{
    /// Creates an invoker.
    ///
    /// `stream_timeout` bounds the whole call, from opening the session to
    /// the end of the stream. `None` waits indefinitely.
    #[must_use]
    pub const fn new(runtime: Arc<R>, stream_timeout: Option<Duration>) -> Self {
        Self {
            runtime,
            stream_timeout,
        }
    }

    /// Sends `query` to an agent through `alias_id` in a fresh session.
    ///
    /// # Errors
    ///
    /// Returns [`InvocationError`] when the session cannot be opened, the
    /// stream fails or times out, or the answer is not valid UTF-8. Partial
    /// answers are never returned.
    pub async fn invoke(
        &self,
        agent: &AgentRecord,
        alias_id: &AliasId,
        query: &str,
    ) -> InvocationResult<AgentResponse> {
        let request = InvocationRequest {
            agent_id: agent.id().clone(),
            alias_id: alias_id.clone(),
            session_id: SessionId::new(),
            input_text: query.to_owned(),
        };
        let session_id = request.session_id;
        info!(
            agent_id = %request.agent_id,
            alias_id = %request.alias_id,
            session_id = %session_id,
            "invoking agent"
        );

        let exchange = self.exchange(&request);
        let (bytes, traces) = match self.stream_timeout {
            Some(timeout) => tokio::time::timeout(timeout, exchange)
                .await
                .map_err(|_| {
                    warn!(session_id = %session_id, ?timeout, "agent invocation timed out");
                    InvocationError::TimedOut {
                        session_id,
                        timeout,
                    }
                })??,
            None => exchange.await?,
        };

        let text = String::from_utf8(bytes)
            .map_err(|source| InvocationError::InvalidUtf8 { session_id, source })?;
        Ok(AgentResponse::new(
            text,
            request.agent_id,
            request.alias_id,
            session_id,
            traces,
        ))
    }

    async fn exchange(&self, request: &InvocationRequest) -> InvocationResult<(Vec<u8>, Vec<Value>)> {
        let stream = self
            .runtime
            .invoke_agent(request)
            .await
            .map_err(|source| InvocationError::Open {
                agent_id: request.agent_id.clone(),
                source,
            })?;
        drain(stream, request.session_id).await
    }
}

/// Consumes a completion stream to its end.
async fn drain(
    mut stream: CompletionStream,
    session_id: SessionId,
) -> InvocationResult<(Vec<u8>, Vec<Value>)> {
    let mut bytes = Vec::new();
    let mut traces = Vec::new();
    let mut chunks: usize = 0;

    while let Some(event) = stream.next().await {
        match event {
            Ok(CompletionEvent::Chunk(chunk)) => {
                chunks = chunks.saturating_add(1);
                bytes.extend_from_slice(&chunk);
            }
            Ok(CompletionEvent::Trace(trace)) => traces.push(trace),
            Err(source) => {
                warn!(
                    session_id = %session_id,
                    discarded_bytes = bytes.len(),
                    error = %source,
                    "completion stream failed; discarding partial answer"
                );
                return Err(InvocationError::Stream {
                    session_id,
                    discarded_bytes: bytes.len(),
                    source,
                });
            }
        }
    }

    debug!(session_id = %session_id, chunks, traces = traces.len(), "completion stream finished");
    Ok((bytes, traces))
}
