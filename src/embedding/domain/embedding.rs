//! Outcome of one embedding request.

use super::EmbeddingVector;
use crate::embedding::ports::EmbedderError;

/// Result of embedding one text.
///
/// A degraded embedding carries the zero vector together with the upstream
/// cause, so the fallback stays visible to callers and tests instead of
/// being swallowed.
#[derive(Debug, Clone)]
pub enum Embedding {
    /// The embedder produced a usable vector.
    Ready(EmbeddingVector),
    /// The embedder failed; `vector` is all zeros.
    Degraded {
        /// Zero vector of the configured dimensionality.
        vector: EmbeddingVector,
        /// Upstream failure.
        cause: EmbedderError,
    },
}

impl Embedding {
    /// Returns the vector, degraded or not.
    #[must_use]
    pub const fn vector(&self) -> &EmbeddingVector {
        match self {
            Self::Ready(vector) | Self::Degraded { vector, .. } => vector,
        }
    }

    /// Consumes the outcome and returns its vector.
    #[must_use]
    pub fn into_vector(self) -> EmbeddingVector {
        match self {
            Self::Ready(vector) | Self::Degraded { vector, .. } => vector,
        }
    }

    /// Returns whether the embedder failed.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}
