//! Concierge: semantic routing of queries to registered AI agents.
//!
//! This crate discovers the agents registered with a hosting service, ranks
//! them against a natural-language query by embedding similarity, and
//! forwards the query to the best match, returning its streamed answer as
//! one piece of text.
//!
//! # Architecture
//!
//! Concierge follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, offline)
//!
//! # Modules
//!
//! - [`registry`]: Agent discovery and the cached registry snapshot
//! - [`embedding`]: Fail-soft text embeddings and per-agent caching
//! - [`ranking`]: Cosine-similarity ranking and selection
//! - [`invocation`]: Streaming invocation of a chosen agent
//! - [`selector`]: The facade tying the above into one call
//! - [`tool`]: A named tool wrapping the facade for tool-calling hosts

pub mod embedding;
pub mod invocation;
pub mod ranking;
pub mod registry;
pub mod selector;
pub mod tool;
