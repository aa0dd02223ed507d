//! Port contracts for agent invocation.

pub mod runtime;

pub use runtime::{AgentRuntime, CompletionStream, RuntimeError, RuntimeResult};

#[cfg(test)]
pub use runtime::MockAgentRuntime;
