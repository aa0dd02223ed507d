//! In-memory integration tests for registry loading and refresh policy.

use crate::in_memory::helpers::{Fleet, agent_id, alias, detail, fleet};
use concierge::registry::services::RegistryCacheError;
use concierge::selector::SelectorError;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_listing_page_is_loaded(fleet: Fleet) {
    fleet.catalog.set_page_size(1).expect("page size");

    let snapshot = fleet.selector.list_agents(false).await.expect("load registry");

    let ids: Vec<&str> = snapshot.agents().iter().map(|agent| agent.id().as_str()).collect();
    assert_eq!(ids, ["BILL1", "SUPP1", "TRAV1"]);
    assert_eq!(fleet.catalog.list_agents_calls(), 3);
    assert!(snapshot.is_complete());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn one_broken_agent_does_not_hide_the_others(fleet: Fleet) {
    fleet.catalog.fail_agent(agent_id("SUPP1")).expect("fail agent");

    let Err(SelectorError::Registry(RegistryCacheError::Incomplete(partial))) =
        fleet.selector.list_agents(false).await
    else {
        panic!("expected an incomplete registry load");
    };
    let response = fleet
        .selector
        .answer_query("I need to book a hotel for my travel")
        .await
        .expect("answer from the loaded agents");

    assert_eq!(partial.agents().len(), 2);
    assert!(partial.find(&agent_id("SUPP1")).is_none());
    let failures = partial.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures.first().map(|f| f.agent_id.as_str()), Some("SUPP1"));
    assert_eq!(response.text(), "Travel here.");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn default_alias_is_the_most_recently_updated(fleet: Fleet) {
    fleet
        .catalog
        .upsert_agent(
            detail("BILL1", "Answer billing questions"),
            vec![alias("OLD", 10), alias("NEW", 500), alias("MID", 200)],
        )
        .expect("update aliases");
    fleet.catalog.set_page_size(2).expect("page size");

    let snapshot = fleet.selector.refresh().await.expect("refresh");
    let billing = snapshot.find(&agent_id("BILL1")).expect("billing agent");

    assert_eq!(billing.aliases().len(), 3);
    assert_eq!(
        billing.default_alias_id().map(|id| id.as_str()),
        Some("NEW")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removed_agents_disappear_after_refresh(fleet: Fleet) {
    fleet.selector.list_agents(false).await.expect("initial load");
    fleet.catalog.remove_agent(&agent_id("TRAV1")).expect("remove");

    let cached = fleet.selector.list_agents(false).await.expect("cached");
    let refreshed = fleet.selector.list_agents(true).await.expect("refresh");

    assert_eq!(cached.agents().len(), 3);
    assert_eq!(refreshed.agents().len(), 2);
    assert!(refreshed.loaded_at() >= cached.loaded_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_first_use_loads_once(fleet: Fleet) {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let selector = std::sync::Arc::clone(&fleet.selector);
            tokio::spawn(async move { selector.list_agents(false).await.map(|s| s.agents().len()) })
        })
        .collect();

    for handle in handles {
        let count = handle.await.expect("join").expect("load registry");
        assert_eq!(count, 3);
    }
    assert_eq!(fleet.catalog.list_agents_calls(), 1);
}
