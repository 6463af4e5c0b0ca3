//! Step definitions for agent liveness BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
