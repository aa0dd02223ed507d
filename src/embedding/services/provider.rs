//! Fail-soft embedding provider.

use crate::embedding::{
    domain::{Embedding, EmbeddingVector},
    ports::{EmbedderError, TextEmbedder},
};
use std::sync::Arc;
use tracing::warn;

/// Dimensionality of the default embedding model.
pub const DEFAULT_EMBEDDING_DIMENSION: usize = 1536;

/// Wraps a [`TextEmbedder`] so that failures never reach the caller.
///
/// Any upstream error, a vector of the wrong dimensionality, or a vector with
/// non-finite components yields [`Embedding::Degraded`] carrying the zero
/// vector.
pub struct EmbeddingProvider<E>
where
    E: TextEmbedder,
{
    embedder: Arc<E>,
    dimension: usize,
}

impl<E> EmbeddingProvider<E>
where
    E: TextEmbedder,
{
    /// Creates a provider expecting vectors of `dimension` components.
    #[must_use]
    pub const fn new(embedder: Arc<E>, dimension: usize) -> Self {
        Self {
            embedder,
            dimension,
        }
    }

    /// Returns the expected dimensionality.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Embeds one text, degrading to the zero vector on failure.
    pub async fn embed(&self, text: &str) -> Embedding {
        match self.embedder.embed(text).await.and_then(|values| self.validate(values)) {
            Ok(vector) => Embedding::Ready(vector),
            Err(cause) => {
                warn!(error = %cause, "embedding failed; substituting the zero vector");
                Embedding::Degraded {
                    vector: EmbeddingVector::zeros(self.dimension),
                    cause,
                }
            }
        }
    }

    fn validate(&self, values: Vec<f32>) -> Result<EmbeddingVector, EmbedderError> {
        if values.len() != self.dimension {
            return Err(EmbedderError::DimensionMismatch {
                expected: self.dimension,
                actual: values.len(),
            });
        }
        if values.iter().any(|value| !value.is_finite()) {
            return Err(EmbedderError::NonFinite);
        }
        Ok(EmbeddingVector::new(values))
    }
}
