//! Unit tests for the selector facade.
