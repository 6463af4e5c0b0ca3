//! Application services for agents and liveness reporting.

mod agent;
mod config;
pub mod reporting;

pub use agent::Agent;
pub use config::{
    AgentConfig, ENV_AGENT_ID, ENV_BASE_URL, ENV_CHANNELS, ENV_REPORT_DETAIL, ENV_REPORT_POLICY,
    ENV_TIMEOUT_MS, ENV_TOOLS,
};
pub use reporting::{AgentBehaviour, ReportedAction, ReportingOptions};
