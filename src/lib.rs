//! Beamtracks: agent liveness reporting for the Trackrunner control plane.
//!
//! This crate lets callers define agents with an identity and a set of
//! declared tools and channels, and wraps agent actions so that each one
//! announces itself to the control plane before it runs.
//!
//! # Architecture
//!
//! Beamtracks follows hexagonal architecture principles:
//!
//! - **Domain**: Identity, capabilities, and report values with no I/O
//! - **Ports**: The transport trait the services depend on
//! - **Adapters**: A `reqwest` HTTP transport and an in-memory recorder
//! - **Services**: The agent itself and the reporting wrappers
//!
//! # Modules
//!
//! - [`agent`]: Agent identity, capabilities, and liveness reporting
//!
//! # Example
//!
//! ```no_run
//! use beamtracks::agent::{ports::TransportError, services::Agent};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let agent = Agent::from_parts("test-123", "http://localhost:4000/api")?;
//! agent
//!     .run_reported("heartbeat", || async { Ok::<_, TransportError>(()) })
//!     .await?;
//! agent.close().await;
//! # Ok(())
//! # }
//! ```

pub mod agent;
