//! Adapter implementations for embedding ports.

mod keyword;

pub use keyword::KeywordEmbedder;
