//! Cosine-similarity ranking of agents against a query.
//!
//! Ranking is pure: it takes a query vector and candidate agent vectors and
//! produces an ordered list of [`MatchResult`]s. Selection collapses that
//! list into a single [`Selection`], which is either a match or an explicit
//! [`NoMatchReason`].

mod selection;
mod similarity;

pub use selection::{MatchResult, NoMatchReason, Selection, rank, select, select_best};
pub use similarity::cosine_similarity;
