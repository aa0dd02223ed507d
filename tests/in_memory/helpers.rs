//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use concierge::embedding::adapters::KeywordEmbedder;
use concierge::invocation::adapters::memory::{ScriptStep, ScriptedAgentRuntime};
use concierge::registry::{
    adapters::memory::InMemoryAgentCatalog,
    domain::{AgentDetail, AgentId, AgentStatus, AliasId, AliasRecord},
};
use concierge::selector::{AgentSelector, SelectorConfig};
use mockable::DefaultClock;
use rstest::fixture;

/// Embedding dimension used by the offline embedder.
pub const DIMENSION: usize = 24;

/// Selector type wired to in-memory adapters.
pub type MemorySelector =
    AgentSelector<InMemoryAgentCatalog, KeywordEmbedder, ScriptedAgentRuntime, DefaultClock>;

/// Catalog, runtime, and a selector sharing them.
pub struct Fleet {
    /// Catalog backing the selector.
    pub catalog: InMemoryAgentCatalog,
    /// Runtime backing the selector.
    pub runtime: ScriptedAgentRuntime,
    /// The selector under test.
    pub selector: Arc<MemorySelector>,
}

impl Fleet {
    /// Creates an empty fleet with the given configuration.
    #[must_use]
    pub fn with_config(config: SelectorConfig) -> Self {
        let catalog = InMemoryAgentCatalog::new();
        let runtime = ScriptedAgentRuntime::new();
        let selector = Arc::new(AgentSelector::new(
            Arc::new(catalog.clone()),
            Arc::new(embedder()),
            Arc::new(runtime.clone()),
            Arc::new(DefaultClock),
            config,
        ));
        Self {
            catalog,
            runtime,
            selector,
        }
    }

    /// Registers an agent with a single `LIVE` alias that answers `reply`.
    pub fn deploy(&self, id: &str, instructions: &str, reply: &str) {
        self.catalog
            .upsert_agent(detail(id, instructions), vec![alias("LIVE", 100)])
            .expect("register agent");
        self.runtime
            .set_script(agent_id(id), vec![ScriptStep::Text(reply.to_owned())])
            .expect("script agent");
    }
}

/// Provides a fleet with billing, support, and travel agents deployed.
#[fixture]
pub fn fleet() -> Fleet {
    let fleet = Fleet::with_config(SelectorConfig::offline(DIMENSION).with_fetch_concurrency(2));
    fleet.deploy(
        "BILL1",
        "Answer billing, invoice, and payment questions",
        "Billing here.",
    );
    fleet.deploy(
        "SUPP1",
        "Technical support and crash troubleshooting",
        "Support here.",
    );
    fleet.deploy(
        "TRAV1",
        "Book flights, hotels, and travel itineraries",
        "Travel here.",
    );
    fleet
}

/// Offline embedder with billing, support, and travel vocabularies.
#[must_use]
pub fn embedder() -> KeywordEmbedder {
    KeywordEmbedder::new(DIMENSION)
        .with_concept(
            "billing",
            ["billing", "invoice", "invoices", "payment", "charged", "refund"],
        )
        .with_concept(
            "support",
            ["technical", "support", "crash", "troubleshooting", "error"],
        )
        .with_concept(
            "travel",
            ["flights", "flight", "hotels", "hotel", "travel", "itineraries"],
        )
}

/// Parses an agent identifier.
#[must_use]
pub fn agent_id(raw: &str) -> AgentId {
    AgentId::new(raw).expect("valid agent id")
}

/// Returns a fixed timestamp offset by `seconds`.
#[must_use]
pub fn timestamp(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + seconds, 0)
        .single()
        .expect("valid timestamp")
}

/// Builds active agent detail.
#[must_use]
pub fn detail(id: &str, instructions: &str) -> AgentDetail {
    AgentDetail {
        id: agent_id(id),
        name: id.to_owned(),
        instructions: instructions.to_owned(),
        status: AgentStatus::Active,
        foundation_model: "model-v1".to_owned(),
        created_at: timestamp(0),
        updated_at: timestamp(0),
    }
}

/// Builds an alias updated `seconds` after the base timestamp.
#[must_use]
pub fn alias(id: &str, seconds: i64) -> AliasRecord {
    AliasRecord::new(
        AliasId::new(id).expect("valid alias id"),
        id,
        timestamp(seconds),
    )
}
