//! Tool surface over the selector.
//!
//! Exposes "answer this query" as a single named tool taking one string
//! argument, so a tool-calling host can route free-form questions to the
//! best registered agent. Transport is left to the host.

mod answer;
mod definition;
mod error;

pub use answer::{AnswerQueryTool, ToolOutput};
pub use definition::{AGENT_REGISTRY_TOOL, ToolDefinition};
pub use error::{ToolCallError, ToolDefinitionError};

#[cfg(test)]
mod tests;
