//! In-memory integration tests for selection and invocation.

use std::sync::Arc;

use crate::in_memory::helpers::{Fleet, agent_id, fleet};
use concierge::invocation::{adapters::memory::ScriptStep, services::InvocationError};
use concierge::ranking::{NoMatchReason, Selection};
use concierge::selector::{AnswerError, SelectorConfig};
use rstest::rstest;

#[rstest]
#[case("I was charged twice, where is my refund?", "BILL1", "Billing here.")]
#[case("The app shows an error and then a crash", "SUPP1", "Support here.")]
#[case("Find me hotels near the conference", "TRAV1", "Travel here.")]
#[tokio::test(flavor = "multi_thread")]
async fn queries_reach_the_matching_agent(
    fleet: Fleet,
    #[case] query: &str,
    #[case] expected_agent: &str,
    #[case] expected_text: &str,
) {
    let response = fleet.selector.answer_query(query).await.expect("answer");

    assert_eq!(response.agent_id(), &agent_id(expected_agent));
    assert_eq!(response.text(), expected_text);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_call_opens_a_new_session(fleet: Fleet) {
    let first = fleet.selector.answer_query("invoice").await.expect("first");
    let second = fleet.selector.answer_query("invoice").await.expect("second");

    assert_ne!(first.session_id(), second.session_id());
    let requests = fleet.runtime.requests().expect("requests");
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|request| request.alias_id.as_str() == "LIVE"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_queries_share_one_registry(fleet: Fleet) {
    let queries = ["invoice", "crash", "flights", "payment"];
    let handles: Vec<_> = queries
        .iter()
        .map(|query| {
            let selector = Arc::clone(&fleet.selector);
            let owned = (*query).to_owned();
            tokio::spawn(async move { selector.answer_query(&owned).await })
        })
        .collect();

    for handle in handles {
        handle.await.expect("join").expect("answer");
    }
    assert_eq!(fleet.catalog.list_agents_calls(), 1);
    assert_eq!(fleet.catalog.get_agent_calls(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unrelated_query_scores_below_a_strict_threshold() {
    let strict = Fleet::with_config(
        SelectorConfig::offline(crate::in_memory::helpers::DIMENSION).with_min_score(0.95),
    );
    strict.deploy("BILL1", "billing invoice payment refund", "Billing here.");

    let selection = strict
        .selector
        .select_agent("invoice for the weather forecast tomorrow")
        .await
        .expect("selection");
    let err = strict
        .selector
        .answer_query("invoice for the weather forecast tomorrow")
        .await
        .expect_err("below threshold");

    assert!(matches!(
        selection,
        Selection::NoMatch(NoMatchReason::BelowThreshold { .. })
    ));
    assert_eq!(
        err.user_message(),
        "Couldn't find a suitable agent for your query."
    );
    assert!(strict.runtime.requests().expect("requests").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stalled_stream_times_out() {
    let fleet = Fleet::with_config(
        SelectorConfig::offline(crate::in_memory::helpers::DIMENSION)
            .with_stream_timeout_secs(Some(1)),
    );
    fleet.deploy("BILL1", "billing invoice", "unused");
    fleet
        .runtime
        .set_script(
            agent_id("BILL1"),
            vec![ScriptStep::Text("Thinking".to_owned()), ScriptStep::Stall],
        )
        .expect("script");

    let err = fleet
        .selector
        .answer_query("invoice")
        .await
        .expect_err("timeout");

    assert!(matches!(
        err,
        AnswerError::Invocation(InvocationError::TimedOut { .. })
    ));
}
