//! In-memory integration tests for the answer-query tool.

use crate::in_memory::helpers::{Fleet, fleet};
use concierge::tool::{AGENT_REGISTRY_TOOL, AnswerQueryTool, ToolCallError};
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tool_routes_queries_through_the_selector(fleet: Fleet) {
    let tool = AnswerQueryTool::new(Arc::clone(&fleet.selector));

    let output = tool
        .call(&json!({ "query": "Book two flights to Lisbon" }))
        .await
        .expect("tool call");

    assert_eq!(tool.definition().name(), AGENT_REGISTRY_TOOL);
    assert!(!output.is_error);
    assert_eq!(output.text, "Travel here.");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registry_outage_is_reported_to_the_caller(fleet: Fleet) {
    fleet.catalog.set_listing_fails(true).expect("toggle");
    let tool = AnswerQueryTool::new(Arc::clone(&fleet.selector));

    let output = tool
        .call(&json!({ "query": "invoice" }))
        .await
        .expect("tool call");

    assert!(output.is_error);
    assert_eq!(
        output.text,
        "The agent registry is unavailable right now. Please try again later."
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_query_never_reaches_the_registry(fleet: Fleet) {
    let tool = AnswerQueryTool::new(Arc::clone(&fleet.selector));

    let result = tool.call(&json!({ "query": "" })).await;

    assert_eq!(result, Err(ToolCallError::BlankQuery));
    assert_eq!(fleet.catalog.list_agents_calls(), 0);
}
