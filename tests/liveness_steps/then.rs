//! Then steps for agent liveness BDD scenarios.

use super::world::LivenessWorld;
use beamtracks::agent::ports::TransportError;
use rstest_bdd_macros::then;
use serde_json::json;

#[then("the control plane has received {count:usize} liveness reports")]
fn control_plane_received(world: &LivenessWorld, count: usize) -> Result<(), eyre::Report> {
    let received = world.transport()?.requests().len();
    if received != count {
        return Err(eyre::eyre!("expected {count} reports, found {received}"));
    }
    Ok(())
}

#[then(r#"the last report names agent "{agent_id}" and method "{method}""#)]
fn last_report_names(
    world: &LivenessWorld,
    agent_id: String,
    method: String,
) -> Result<(), eyre::Report> {
    let requests = world.transport()?.requests();
    let last = requests
        .last()
        .ok_or_else(|| eyre::eyre!("no report was recorded"))?;
    let expected = json!({"agent_id": agent_id, "method": method});
    if last.body != expected {
        return Err(eyre::eyre!("expected body {expected}, found {}", last.body));
    }
    Ok(())
}

#[then("the action body ran {count:usize} times")]
fn action_body_ran(world: &LivenessWorld, count: usize) -> Result<(), eyre::Report> {
    let runs = world.body_runs();
    if runs != count {
        return Err(eyre::eyre!("expected body to run {count} times, ran {runs}"));
    }
    Ok(())
}

#[then("the action fails with server status {status:u16}")]
fn action_fails_with_status(world: &LivenessWorld, status: u16) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no action result in scenario world"))?;
    match result {
        Err(TransportError::Server { status_code, .. }) if *status_code == status => Ok(()),
        other => Err(eyre::eyre!("expected server error {status}, got {other:?}")),
    }
}

#[then("the action succeeds")]
fn action_succeeds(world: &LivenessWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(())) => Ok(()),
        other => Err(eyre::eyre!("expected success, got {other:?}")),
    }
}

#[then("the agent has {count:usize} declared tools")]
fn agent_has_tools(world: &LivenessWorld, count: usize) -> Result<(), eyre::Report> {
    let declared = world.agent()?.capabilities().tools().len();
    if declared != count {
        return Err(eyre::eyre!("expected {count} tools, found {declared}"));
    }
    Ok(())
}
