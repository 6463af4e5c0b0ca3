//! Shared world state for agent liveness BDD scenarios.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use beamtracks::agent::{
    adapters::RecordingTransport,
    domain::{AgentIdentity, ReportPolicy},
    ports::TransportError,
    services::{Agent, ReportingOptions},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Agent type used by the BDD world.
pub type TestAgent = Agent<RecordingTransport, DefaultClock>;

/// Scenario world for liveness reporting behaviour tests.
pub struct LivenessWorld {
    /// Handle on the recording transport owned by the agent.
    pub transport: Option<RecordingTransport>,
    /// The agent under test.
    pub agent: Option<TestAgent>,
    /// Number of times an action body has run.
    pub body_runs: Arc<AtomicUsize>,
    /// Result of the last reported action.
    pub last_result: Option<Result<(), TransportError>>,
}

impl LivenessWorld {
    /// Creates a world with no agent yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transport: None,
            agent: None,
            body_runs: Arc::new(AtomicUsize::new(0)),
            last_result: None,
        }
    }

    /// Builds the agent under test over a fresh recording transport.
    pub fn install_agent(
        &mut self,
        agent_id: &str,
        base_url: &str,
        policy: ReportPolicy,
    ) -> Result<(), eyre::Report> {
        let identity = AgentIdentity::parse(agent_id, base_url)
            .map_err(|err| eyre::eyre!("invalid identity: {err}"))?;
        let transport = RecordingTransport::new(identity.base_url().clone());
        let agent = Agent::new(identity, transport.clone(), DefaultClock)
            .with_reporting(ReportingOptions::default().with_policy(policy));
        self.transport = Some(transport);
        self.agent = Some(agent);
        Ok(())
    }

    /// Returns the agent under test.
    pub fn agent(&self) -> Result<&TestAgent, eyre::Report> {
        self.agent
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no agent in scenario world"))
    }

    /// Returns the recording transport.
    pub fn transport(&self) -> Result<&RecordingTransport, eyre::Report> {
        self.transport
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no transport in scenario world"))
    }

    /// Returns how many times an action body has run.
    pub fn body_runs(&self) -> usize {
        self.body_runs.load(Ordering::SeqCst)
    }
}

impl Default for LivenessWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> LivenessWorld {
    LivenessWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
