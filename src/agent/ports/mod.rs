//! Port contracts for reaching the control plane.
//!
//! Ports define infrastructure-agnostic interfaces used by the agent
//! services.

pub mod transport;

pub use transport::{Transport, TransportError, TransportResult};
