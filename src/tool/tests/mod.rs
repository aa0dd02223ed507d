//! Unit tests for the tool surface.
