//! Shared world state for agent selection BDD scenarios.

use std::sync::Arc;

use concierge::embedding::adapters::KeywordEmbedder;
use concierge::invocation::{
    adapters::memory::ScriptedAgentRuntime, domain::AgentResponse,
};
use concierge::ranking::Selection;
use concierge::registry::{
    adapters::memory::InMemoryAgentCatalog,
    domain::{AgentDetail, AgentId, AgentStatus, AliasId, AliasRecord},
};
use concierge::selector::{AgentSelector, AnswerError, SelectorConfig, SelectorError};
use chrono::Utc;
use mockable::DefaultClock;
use rstest::fixture;

/// Selector type used by the BDD world.
pub type TestSelector =
    AgentSelector<InMemoryAgentCatalog, KeywordEmbedder, ScriptedAgentRuntime, DefaultClock>;

/// Scenario world for agent selection behaviour tests.
pub struct SelectionWorld {
    /// Catalog backing the selector.
    pub catalog: InMemoryAgentCatalog,
    /// Runtime backing the selector.
    pub runtime: ScriptedAgentRuntime,
    /// The selector under test.
    pub selector: TestSelector,
    /// Result of the last `answer_query` call.
    pub last_answer: Option<Result<AgentResponse, AnswerError>>,
    /// Result of the last `select_agent` call.
    pub last_selection: Option<Result<Selection, SelectorError>>,
}

impl SelectionWorld {
    /// Creates a world over an empty catalog and runtime.
    #[must_use]
    pub fn new() -> Self {
        let catalog = InMemoryAgentCatalog::new();
        let runtime = ScriptedAgentRuntime::new();
        let selector = AgentSelector::new(
            Arc::new(catalog.clone()),
            Arc::new(embedder()),
            Arc::new(runtime.clone()),
            Arc::new(DefaultClock),
            SelectorConfig::offline(16),
        );
        Self {
            catalog,
            runtime,
            selector,
            last_answer: None,
            last_selection: None,
        }
    }
}

impl Default for SelectionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SelectionWorld {
    SelectionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Offline embedder with billing and support vocabularies.
pub fn embedder() -> KeywordEmbedder {
    KeywordEmbedder::new(16)
        .with_concept(
            "billing",
            ["billing", "invoice", "invoices", "payment", "charged"],
        )
        .with_concept(
            "support",
            ["technical", "support", "troubleshooting", "crash"],
        )
}

/// Builds agent detail for a scenario agent.
pub fn agent_detail(
    id: &str,
    name: &str,
    instructions: &str,
) -> Result<AgentDetail, eyre::Report> {
    let now = Utc::now();
    Ok(AgentDetail {
        id: AgentId::new(id)?,
        name: name.to_owned(),
        instructions: instructions.to_owned(),
        status: AgentStatus::Active,
        foundation_model: "model-v1".to_owned(),
        created_at: now,
        updated_at: now,
    })
}

/// Builds the alias every scenario agent is deployed under.
pub fn live_alias() -> Result<AliasRecord, eyre::Report> {
    Ok(AliasRecord::new(AliasId::new("LIVE")?, "live", Utc::now()))
}
