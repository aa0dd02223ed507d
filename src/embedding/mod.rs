//! Text embeddings for semantic agent matching.
//!
//! Wraps an external text-embedding capability behind a fail-soft provider:
//! upstream failures degrade to a zero vector instead of aborting selection.
//! Agent embeddings are cached per agent and re-computed when an agent's
//! instructions change.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
