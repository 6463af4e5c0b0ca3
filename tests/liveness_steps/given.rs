//! Given steps for agent liveness BDD scenarios.

use super::world::LivenessWorld;
use beamtracks::agent::{domain::ReportPolicy, ports::TransportError};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"an agent "{agent_id}" bound to "{base_url}""#)]
fn an_agent(
    world: &mut LivenessWorld,
    agent_id: String,
    base_url: String,
) -> Result<(), eyre::Report> {
    world.install_agent(&agent_id, &base_url, ReportPolicy::FailClosed)
}

#[given(r#"a fail-open agent "{agent_id}" bound to "{base_url}""#)]
fn a_fail_open_agent(
    world: &mut LivenessWorld,
    agent_id: String,
    base_url: String,
) -> Result<(), eyre::Report> {
    world.install_agent(&agent_id, &base_url, ReportPolicy::FailOpen)
}

#[given("the control plane rejects the next report with status {status:u16}")]
fn control_plane_rejects(world: &mut LivenessWorld, status: u16) -> Result<(), eyre::Report> {
    let transport = world.transport()?;
    transport.fail_with(TransportError::Server {
        status_code: status,
        url: "http://localhost:4000/api/ping".to_owned(),
    });
    Ok(())
}

#[given(r#"the agent declares tool "{tool}""#)]
fn agent_declares_tool(world: &mut LivenessWorld, tool: String) -> Result<(), eyre::Report> {
    world
        .agent()?
        .register_tool(tool)
        .wrap_err("declare tool for scenario")?;
    Ok(())
}
