//! Selector facade.
//!
//! [`AgentSelector`] is the single entry point collaborators call: it reuses
//! or refreshes the registry, makes sure every agent has an embedding, ranks
//! agents against the query, and invokes the winner. Each call ends in
//! exactly one of three outcomes: an answer, no suitable agent, or an
//! invocation failure. Nothing is retried automatically.

mod config;
mod error;
mod service;

pub use config::SelectorConfig;
pub use error::{AnswerError, InvokeError, SelectorError, SelectorResult};
pub use service::AgentSelector;

#[cfg(test)]
mod tests;
