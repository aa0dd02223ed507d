//! Tool definition value object.

use super::ToolDefinitionError;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Default name of the answer-query tool.
pub const AGENT_REGISTRY_TOOL: &str = "agent_registry";

const AGENT_REGISTRY_DESCRIPTION: &str = "Query the agent registry: the registered agent \
     best suited to the query answers it.";

/// Metadata a host advertises for a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    name: String,
    description: String,
    input_schema: Value,
}

impl ToolDefinition {
    /// Creates a tool definition.
    ///
    /// # Errors
    ///
    /// Returns [`ToolDefinitionError`] when name or description is empty.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Result<Self, ToolDefinitionError> {
        let normalized_name = name.into().trim().to_owned();
        if normalized_name.is_empty() {
            return Err(ToolDefinitionError::EmptyName);
        }

        let normalized_description = description.into().trim().to_owned();
        if normalized_description.is_empty() {
            return Err(ToolDefinitionError::EmptyDescription);
        }

        Ok(Self {
            name: normalized_name,
            description: normalized_description,
            input_schema,
        })
    }

    /// Returns the definition of the default `agent_registry` tool.
    #[must_use]
    pub fn agent_registry() -> Self {
        Self {
            name: AGENT_REGISTRY_TOOL.to_owned(),
            description: AGENT_REGISTRY_DESCRIPTION.to_owned(),
            input_schema: Self::query_schema(),
        }
    }

    /// Returns the schema of a tool taking a single required `query`
    /// string.
    #[must_use]
    pub fn query_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The query string to search for"
                }
            },
            "required": ["query"]
        })
    }

    /// Returns the tool name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tool description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the input schema.
    #[must_use]
    pub const fn input_schema(&self) -> &Value {
        &self.input_schema
    }
}
