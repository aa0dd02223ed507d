//! In-memory adapters for invocation ports.

mod runtime;

pub use runtime::{ScriptStep, ScriptedAgentRuntime};
