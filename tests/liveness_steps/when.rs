//! When steps for agent liveness BDD scenarios.

use super::world::{LivenessWorld, run_async};
use beamtracks::agent::ports::TransportError;
use rstest_bdd_macros::when;
use std::sync::{Arc, atomic::Ordering};

#[when(r#"the agent runs the reported action "{action}""#)]
fn agent_runs_action(world: &mut LivenessWorld, action: String) -> Result<(), eyre::Report> {
    let runs = Arc::clone(&world.body_runs);
    let agent = world.agent()?;
    let result = run_async(agent.run_reported(action, || async move {
        runs.fetch_add(1, Ordering::SeqCst);
        Ok::<_, TransportError>(())
    }));
    world.last_result = Some(result);
    Ok(())
}
