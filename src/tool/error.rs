//! Error types for the tool surface.

use thiserror::Error;

/// Errors raised when building a tool definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolDefinitionError {
    /// The tool name was empty after trimming.
    #[error("tool name must not be empty")]
    EmptyName,
    /// The tool description was empty after trimming.
    #[error("tool description must not be empty")]
    EmptyDescription,
}

/// Errors raised when tool arguments are unusable.
///
/// Failures of the query itself are reported through
/// [`super::ToolOutput::is_error`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolCallError {
    /// Arguments were not a JSON object.
    #[error("tool arguments must be a JSON object")]
    NotAnObject,
    /// The `query` argument was absent.
    #[error("missing required argument: query")]
    MissingQuery,
    /// The `query` argument was not a string.
    #[error("argument query must be a string")]
    QueryNotString,
    /// The `query` argument was empty or whitespace.
    #[error("argument query must not be blank")]
    BlankQuery,
}
