//! Unit tests for the embedding module.
