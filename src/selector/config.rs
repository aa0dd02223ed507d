//! Selector configuration.

use crate::embedding::services::DEFAULT_EMBEDDING_DIMENSION;
use serde::Deserialize;
use std::time::Duration;

/// Tuning knobs for [`super::AgentSelector`].
///
/// Deserialises from any serde format so hosts can embed it in their own
/// configuration files; missing fields take their defaults.
///
/// # Examples
///
/// ```
/// use concierge::selector::SelectorConfig;
///
/// let config = SelectorConfig::default();
/// assert!(config.min_score.is_none());
/// assert_eq!(config.embedding_dimension, 1536);
///
/// let gated = SelectorConfig::default().with_min_score(0.6);
/// assert_eq!(gated.min_score, Some(0.6));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Minimum similarity the best agent must reach; `None` accepts any
    /// score.
    pub min_score: Option<f32>,
    /// Dimensionality produced by the embedding model.
    pub embedding_dimension: usize,
    /// Maximum concurrent remote calls while loading agents or embedding
    /// their instructions.
    pub fetch_concurrency: usize,
    /// Upper bound, in seconds, on one invocation; `None` waits
    /// indefinitely.
    pub stream_timeout_secs: Option<u64>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            min_score: None,
            embedding_dimension: DEFAULT_EMBEDDING_DIMENSION,
            fetch_concurrency: 4,
            stream_timeout_secs: Some(120),
        }
    }
}

impl SelectorConfig {
    /// Creates a configuration for an offline embedder of the given size.
    ///
    /// Useful with [`crate::embedding::adapters::KeywordEmbedder`] in tests
    /// and demos; remote calls run one at a time.
    #[must_use]
    pub fn offline(embedding_dimension: usize) -> Self {
        Self {
            embedding_dimension,
            fetch_concurrency: 1,
            ..Default::default()
        }
    }

    /// Creates a configuration that refuses weak matches.
    ///
    /// Useful when a wrong answer is worse than no answer.
    #[must_use]
    pub fn strict(min_score: f32) -> Self {
        Self {
            min_score: Some(min_score),
            ..Default::default()
        }
    }

    /// Sets the minimum similarity required for a match.
    #[must_use]
    pub const fn with_min_score(mut self, min_score: f32) -> Self {
        self.min_score = Some(min_score);
        self
    }

    /// Sets the embedding dimensionality.
    #[must_use]
    pub const fn with_embedding_dimension(mut self, dimension: usize) -> Self {
        self.embedding_dimension = dimension;
        self
    }

    /// Sets the fan-out limit for registry and embedding calls.
    #[must_use]
    pub const fn with_fetch_concurrency(mut self, concurrency: usize) -> Self {
        self.fetch_concurrency = concurrency;
        self
    }

    /// Sets the invocation timeout; `None` disables it.
    #[must_use]
    pub const fn with_stream_timeout_secs(mut self, seconds: Option<u64>) -> Self {
        self.stream_timeout_secs = seconds;
        self
    }

    /// Returns the invocation timeout as a [`Duration`].
    #[must_use]
    pub fn stream_timeout(&self) -> Option<Duration> {
        self.stream_timeout_secs.map(Duration::from_secs)
    }
}
