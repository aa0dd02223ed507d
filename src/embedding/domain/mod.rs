//! Domain model for embeddings.

mod embedding;
mod vector;

pub use embedding::Embedding;
pub use vector::EmbeddingVector;
