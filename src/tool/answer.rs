//! The answer-query tool.

use super::{ToolCallError, ToolDefinition, ToolDefinitionError};
use crate::embedding::ports::TextEmbedder;
use crate::invocation::ports::AgentRuntime;
use crate::registry::ports::AgentCatalog;
use crate::selector::AgentSelector;
use mockable::Clock;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

/// Text returned to the host for one tool call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolOutput {
    /// Answer text, or a user-facing failure message.
    pub text: String,
    /// Whether `text` describes a failure.
    pub is_error: bool,
}

/// Tool answering free-form queries with the best matching agent.
pub struct AnswerQueryTool<C, E, R, K>
where
    C: AgentCatalog,
    E: TextEmbedder,
    R: AgentRuntime,
    K: Clock + Send + Sync,
{
    selector: Arc<AgentSelector<C, E, R, K>>,
    definition: ToolDefinition,
}

impl<C, E, R, K> AnswerQueryTool<C, E, R, K>
where
    C: AgentCatalog,
    E: TextEmbedder,
    R: AgentRuntime,
    K: Clock + Send + Sync,
{
    /// Creates the tool under its default name.
    #[must_use]
    pub fn new(selector: Arc<AgentSelector<C, E, R, K>>) -> Self {
        Self {
            selector,
            definition: ToolDefinition::agent_registry(),
        }
    }

    /// Creates the tool under a custom name and description.
    ///
    /// Several names may share one selector, for instance to advertise the
    /// same registry to different audiences.
    ///
    /// # Errors
    ///
    /// Returns [`ToolDefinitionError`] when name or description is empty.
    pub fn named(
        selector: Arc<AgentSelector<C, E, R, K>>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ToolDefinitionError> {
        let definition = ToolDefinition::new(name, description, ToolDefinition::query_schema())?;
        Ok(Self {
            selector,
            definition,
        })
    }

    /// Returns the advertised definition.
    #[must_use]
    pub const fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    /// Answers the `query` argument.
    ///
    /// Selection and invocation failures become an output with
    /// `is_error` set and a user-facing message.
    ///
    /// # Errors
    ///
    /// Returns [`ToolCallError`] when the arguments lack a usable `query`.
    pub async fn call(&self, arguments: &Value) -> Result<ToolOutput, ToolCallError> {
        let query = query_argument(arguments)?;
        match self.selector.answer_query(query).await {
            Ok(response) => Ok(ToolOutput {
                text: response.into_text(),
                is_error: false,
            }),
            Err(err) => {
                warn!(tool = self.definition.name(), error = %err, "query failed");
                Ok(ToolOutput {
                    text: err.user_message().to_owned(),
                    is_error: true,
                })
            }
        }
    }
}

fn query_argument(arguments: &Value) -> Result<&str, ToolCallError> {
    let object = arguments.as_object().ok_or(ToolCallError::NotAnObject)?;
    let query = object
        .get("query")
        .ok_or(ToolCallError::MissingQuery)?
        .as_str()
        .ok_or(ToolCallError::QueryNotString)?;
    if query.trim().is_empty() {
        return Err(ToolCallError::BlankQuery);
    }
    Ok(query)
}
