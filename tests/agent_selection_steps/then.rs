//! Then steps for agent selection BDD scenarios.

use super::world::SelectionWorld;
use concierge::invocation::{domain::AgentResponse, services::InvocationError};
use concierge::selector::AnswerError;
use rstest_bdd_macros::then;

fn answer(world: &SelectionWorld) -> Result<&AgentResponse, eyre::Report> {
    match world.last_answer.as_ref() {
        Some(Ok(response)) => Ok(response),
        Some(Err(err)) => Err(eyre::eyre!("query failed: {err}")),
        None => Err(eyre::eyre!("no query was answered in this scenario")),
    }
}

fn failure(world: &SelectionWorld) -> Result<&AnswerError, eyre::Report> {
    match world.last_answer.as_ref() {
        Some(Err(err)) => Ok(err),
        Some(Ok(response)) => Err(eyre::eyre!(
            "expected a failure, got answer '{}'",
            response.text()
        )),
        None => Err(eyre::eyre!("no query was answered in this scenario")),
    }
}

#[then(r#"the answer is "{text}""#)]
fn answer_is(world: &SelectionWorld, text: String) -> Result<(), eyre::Report> {
    let response = answer(world)?;
    if response.text() != text {
        return Err(eyre::eyre!(
            "expected answer '{text}', got '{}'",
            response.text()
        ));
    }
    Ok(())
}

#[then(r#"the answer came from agent "{id}""#)]
fn answer_from(world: &SelectionWorld, id: String) -> Result<(), eyre::Report> {
    let response = answer(world)?;
    if response.agent_id().as_str() != id {
        return Err(eyre::eyre!(
            "expected agent {id}, got {}",
            response.agent_id()
        ));
    }
    Ok(())
}

#[then(r#"the query fails with the message "{message}""#)]
fn fails_with_message(world: &SelectionWorld, message: String) -> Result<(), eyre::Report> {
    let err = failure(world)?;
    if err.user_message() != message {
        return Err(eyre::eyre!(
            "expected message '{message}', got '{}'",
            err.user_message()
        ));
    }
    Ok(())
}

#[then(r#"the query fails because agent "{id}" is not invocable"#)]
fn fails_not_invocable(world: &SelectionWorld, id: String) -> Result<(), eyre::Report> {
    match failure(world)? {
        AnswerError::NotInvocable(agent_id) if agent_id.as_str() == id => Ok(()),
        other => Err(eyre::eyre!("expected NotInvocable({id}), got {other:?}")),
    }
}

#[then("the query fails with an interrupted stream")]
fn fails_with_interrupted_stream(world: &SelectionWorld) -> Result<(), eyre::Report> {
    match failure(world)? {
        AnswerError::Invocation(InvocationError::Stream { .. }) => Ok(()),
        other => Err(eyre::eyre!("expected a stream failure, got {other:?}")),
    }
}

#[then("the runtime received no requests")]
fn no_runtime_requests(world: &SelectionWorld) -> Result<(), eyre::Report> {
    let requests = world
        .runtime
        .requests()
        .map_err(|err| eyre::eyre!("read runtime requests: {err}"))?;
    if !requests.is_empty() {
        return Err(eyre::eyre!("expected no requests, got {}", requests.len()));
    }
    Ok(())
}

#[then(r#"agent "{id}" is selected"#)]
fn agent_is_selected(world: &SelectionWorld, id: String) -> Result<(), eyre::Report> {
    let selection = match world.last_selection.as_ref() {
        Some(Ok(selection)) => selection,
        Some(Err(err)) => return Err(eyre::eyre!("selection failed: {err}")),
        None => return Err(eyre::eyre!("no selection was made in this scenario")),
    };
    let selected = selection
        .agent()
        .ok_or_else(|| eyre::eyre!("no agent matched: {selection:?}"))?;
    if selected.id().as_str() != id {
        return Err(eyre::eyre!("expected agent {id}, got {}", selected.id()));
    }
    Ok(())
}
