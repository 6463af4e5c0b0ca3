//! Agent identity, capability tracking, and liveness reporting.
//!
//! An [`services::Agent`] owns an identity, a capability set, and a
//! transport bound to the control plane. Reported actions announce
//! themselves with a `/ping` before their body runs. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
