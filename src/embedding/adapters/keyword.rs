//! Deterministic offline embedder based on keyword buckets.

use crate::embedding::ports::{EmbedderResult, TextEmbedder};
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Words ignored when tokenising.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "be", "but", "by", "do", "does", "for", "from", "how", "i", "in",
    "is", "it", "me", "my", "of", "on", "or", "so", "that", "the", "this", "to", "was", "what",
    "when", "where", "which", "who", "why", "with", "you", "your",
];

/// Bag-of-words embedder that needs no remote service.
///
/// Each named concept owns one dimension; any token listed for a concept
/// increments that dimension. Remaining tokens are hashed with SHA-256 into
/// the dimensions left over. Texts sharing concept vocabulary therefore land
/// close together, which makes the embedder useful for tests and offline
/// demos where a real embedding model is unavailable.
#[derive(Debug, Clone)]
pub struct KeywordEmbedder {
    dimension: usize,
    concepts: Vec<String>,
    vocabulary: HashMap<String, usize>,
}

impl KeywordEmbedder {
    /// Creates an embedder producing vectors of the given dimensionality.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            concepts: Vec::new(),
            vocabulary: HashMap::new(),
        }
    }

    /// Registers a concept and the terms that signal it.
    ///
    /// Terms are matched case-insensitively. A term already claimed by an
    /// earlier concept keeps its original owner. Concepts beyond the
    /// vector's dimensionality are ignored.
    #[must_use]
    pub fn with_concept<I, S>(mut self, name: impl Into<String>, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let slot = self.concepts.len();
        if slot >= self.dimension {
            return self;
        }
        self.concepts.push(name.into());
        for term in terms {
            self.vocabulary
                .entry(term.as_ref().trim().to_lowercase())
                .or_insert(slot);
        }
        self
    }

    /// Returns the registered concept names in dimension order.
    #[must_use]
    pub fn concepts(&self) -> &[String] {
        &self.concepts
    }

    /// Returns the vector dimensionality.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    fn slot_for(&self, token: &str) -> Option<usize> {
        if let Some(slot) = self.vocabulary.get(token) {
            return Some(*slot);
        }
        let hashed_slots = self.dimension.checked_sub(self.concepts.len())?;
        let digest = Sha256::digest(token.as_bytes());
        let bucket = digest
            .iter()
            .fold(0_u64, |acc, byte| acc.wrapping_mul(257).wrapping_add(u64::from(*byte)));
        let offset = usize::try_from(bucket.checked_rem(u64::try_from(hashed_slots).ok()?)?).ok()?;
        self.concepts.len().checked_add(offset)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "token counts accumulate into float components"
    )]
    fn vectorise(&self, text: &str) -> Vec<f32> {
        let mut values = vec![0.0_f32; self.dimension];
        for token in tokenise(text) {
            if let Some(component) = self.slot_for(&token).and_then(|slot| values.get_mut(slot)) {
                *component += 1.0;
            }
        }
        values
    }
}

/// Splits text into lowercase alphanumeric tokens, dropping stop words.
fn tokenise(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .filter(|token| !STOP_WORDS.contains(&token.as_str()))
}

#[async_trait]
impl TextEmbedder for KeywordEmbedder {
    async fn embed(&self, text: &str) -> EmbedderResult<Vec<f32>> {
        Ok(self.vectorise(text))
    }
}
