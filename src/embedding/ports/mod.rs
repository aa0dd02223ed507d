//! Port contracts for text embedding.

pub mod embedder;

pub use embedder::{EmbedderError, EmbedderResult, TextEmbedder};

#[cfg(test)]
pub use embedder::MockTextEmbedder;
