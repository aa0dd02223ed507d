//! Application services for embeddings.

mod cache;
mod provider;

pub use cache::{AgentEmbeddingCache, EmbeddingCacheError, EmbeddingCacheResult};
pub use provider::{DEFAULT_EMBEDDING_DIMENSION, EmbeddingProvider};
