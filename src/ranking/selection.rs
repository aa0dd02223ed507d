//! Ranking candidates and selecting the best match.

use super::cosine_similarity;
use crate::embedding::domain::EmbeddingVector;
use crate::registry::domain::{AgentId, AgentRecord};
use std::cmp::Ordering;
use std::fmt;

/// An agent paired with its similarity to a query.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    agent: AgentRecord,
    score: f32,
}

impl MatchResult {
    /// Pairs an agent with a score.
    #[must_use]
    pub const fn new(agent: AgentRecord, score: f32) -> Self {
        Self { agent, score }
    }

    /// Returns the matched agent.
    #[must_use]
    pub const fn agent(&self) -> &AgentRecord {
        &self.agent
    }

    /// Consumes the result and returns the matched agent.
    #[must_use]
    pub fn into_agent(self) -> AgentRecord {
        self.agent
    }

    /// Returns the cosine similarity score.
    #[must_use]
    pub const fn score(&self) -> f32 {
        self.score
    }
}

/// Why no agent was selected.
#[derive(Debug, Clone, PartialEq)]
pub enum NoMatchReason {
    /// The registry holds no agents.
    EmptyRegistry,
    /// There were agents but none could be ranked.
    NoCandidates,
    /// The best candidate scored below the configured minimum.
    BelowThreshold {
        /// Best-scoring agent.
        agent_id: AgentId,
        /// Its score.
        score: f32,
        /// Configured minimum score.
        min_score: f32,
    },
}

impl fmt::Display for NoMatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRegistry => f.write_str("no agents are registered"),
            Self::NoCandidates => f.write_str("no agents could be ranked"),
            Self::BelowThreshold {
                agent_id,
                score,
                min_score,
            } => write!(
                f,
                "best agent {agent_id} scored {score:.3}, below the minimum of {min_score:.3}"
            ),
        }
    }
}

/// Outcome of selecting one agent for a query.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// An agent was selected.
    Matched(MatchResult),
    /// No agent was selected; a legitimate outcome, not an error.
    NoMatch(NoMatchReason),
}

impl Selection {
    /// Returns the match, if any.
    #[must_use]
    pub const fn matched(&self) -> Option<&MatchResult> {
        match self {
            Self::Matched(result) => Some(result),
            Self::NoMatch(_) => None,
        }
    }

    /// Returns the selected agent, if any.
    #[must_use]
    pub const fn agent(&self) -> Option<&AgentRecord> {
        match self {
            Self::Matched(result) => Some(result.agent()),
            Self::NoMatch(_) => None,
        }
    }

    /// Returns whether an agent was selected.
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

/// Orders candidates by similarity to the query.
///
/// Scores sort descending. Equal scores sort by agent identifier ascending,
/// so the order is reproducible for a fixed registry and fixed embeddings.
#[must_use]
pub fn rank<I>(query: &EmbeddingVector, candidates: I) -> Vec<MatchResult>
where
    I: IntoIterator<Item = (AgentRecord, EmbeddingVector)>,
{
    let mut ranked: Vec<MatchResult> = candidates
        .into_iter()
        .map(|(agent, vector)| {
            let score = cosine_similarity(query.as_slice(), vector.as_slice());
            MatchResult::new(agent, score)
        })
        .collect();
    ranked.sort_by(compare_matches);
    ranked
}

fn compare_matches(left: &MatchResult, right: &MatchResult) -> Ordering {
    right
        .score
        .total_cmp(&left.score)
        .then_with(|| left.agent.id().cmp(right.agent.id()))
}

/// Picks the first entry of a ranked list.
///
/// An empty list yields [`NoMatchReason::NoCandidates`]. When `min_score` is
/// set, a best score strictly below it yields
/// [`NoMatchReason::BelowThreshold`].
#[must_use]
pub fn select_best(ranked: Vec<MatchResult>, min_score: Option<f32>) -> Selection {
    let Some(best) = ranked.into_iter().next() else {
        return Selection::NoMatch(NoMatchReason::NoCandidates);
    };

    match min_score {
        Some(minimum) if best.score < minimum => Selection::NoMatch(NoMatchReason::BelowThreshold {
            agent_id: best.agent.id().clone(),
            score: best.score,
            min_score: minimum,
        }),
        _ => Selection::Matched(best),
    }
}

/// Ranks candidates and selects the best one.
#[must_use]
pub fn select<I>(query: &EmbeddingVector, candidates: I, min_score: Option<f32>) -> Selection
where
    I: IntoIterator<Item = (AgentRecord, EmbeddingVector)>,
{
    select_best(rank(query, candidates), min_score)
}
