//! Given steps for agent selection BDD scenarios.

use super::world::{SelectionWorld, agent_detail, live_alias};
use concierge::invocation::adapters::memory::ScriptStep;
use concierge::registry::domain::AgentId;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty agent registry")]
fn empty_registry(world: &mut SelectionWorld) -> Result<(), eyre::Report> {
    if world.catalog.list_agents_calls() != 0 {
        return Err(eyre::eyre!("catalog was queried before the scenario began"));
    }
    Ok(())
}

#[given(r#"an agent "{id}" named "{name}" with instructions "{instructions}""#)]
fn registered_agent(
    world: &mut SelectionWorld,
    id: String,
    name: String,
    instructions: String,
) -> Result<(), eyre::Report> {
    world
        .catalog
        .upsert_agent(agent_detail(&id, &name, &instructions)?, vec![live_alias()?])
        .wrap_err("register agent")
}

#[given(r#"an agent "{id}" with instructions "{instructions}" and no alias"#)]
fn agent_without_alias(
    world: &mut SelectionWorld,
    id: String,
    instructions: String,
) -> Result<(), eyre::Report> {
    world
        .catalog
        .upsert_agent(agent_detail(&id, &id, &instructions)?, Vec::new())
        .wrap_err("register agent without alias")
}

#[given(r#"the agent "{id}" answers "{text}""#)]
fn agent_answers(world: &mut SelectionWorld, id: String, text: String) -> Result<(), eyre::Report> {
    world
        .runtime
        .set_script(AgentId::new(id)?, vec![ScriptStep::Text(text)])
        .wrap_err("script agent answer")
}

#[given(r#"the agent "{id}" fails after answering "{text}""#)]
fn agent_fails_mid_stream(
    world: &mut SelectionWorld,
    id: String,
    text: String,
) -> Result<(), eyre::Report> {
    world
        .runtime
        .set_script(
            AgentId::new(id)?,
            vec![
                ScriptStep::Text(text),
                ScriptStep::Fail("connection reset".to_owned()),
            ],
        )
        .wrap_err("script failing agent")
}
