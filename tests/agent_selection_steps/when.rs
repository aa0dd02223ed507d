//! When steps for agent selection BDD scenarios.

use super::world::{SelectionWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"the query "{query}" is answered"#)]
fn query_answered(world: &mut SelectionWorld, query: String) {
    world.last_answer = Some(run_async(world.selector.answer_query(&query)));
}

#[when(r#"an agent is selected for "{query}""#)]
fn agent_selected(world: &mut SelectionWorld, query: String) {
    world.last_selection = Some(run_async(world.selector.select_agent(&query)));
}
