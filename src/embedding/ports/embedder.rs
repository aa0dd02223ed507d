//! Embedder port for the external text-embedding capability.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for embedder operations.
pub type EmbedderResult<T> = Result<T, EmbedderError>;

/// Converts text into a fixed-length numeric vector.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextEmbedder: Send + Sync {
    /// Embeds one text.
    async fn embed(&self, text: &str) -> EmbedderResult<Vec<f32>>;
}

/// Errors produced while obtaining an embedding.
#[derive(Debug, Clone, Error)]
pub enum EmbedderError {
    /// The embedding service call failed.
    #[error("embedding request failed: {0}")]
    Remote(Arc<dyn std::error::Error + Send + Sync>),

    /// The returned vector has the wrong number of components.
    #[error("embedding has {actual} components, expected {expected}")]
    DimensionMismatch {
        /// Configured dimensionality.
        expected: usize,
        /// Dimensionality returned by the embedder.
        actual: usize,
    },

    /// The returned vector contains NaN or infinite components.
    #[error("embedding contains non-finite components")]
    NonFinite,
}

impl EmbedderError {
    /// Wraps a remote service error.
    pub fn remote(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Remote(Arc::new(err))
    }
}
