//! Streaming agent invocation.
//!
//! Opens one fresh conversational session per call against the hosting
//! service, drains the completion stream, and returns the accumulated
//! answer. A stream that fails part-way is reported as an error; partial
//! text is never returned as a successful answer.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
