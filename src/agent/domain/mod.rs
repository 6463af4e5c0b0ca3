//! Domain model for agent identity and liveness reports.
//!
//! The agent domain models who an agent is (identity and control plane
//! address), what it declares it can do (tools and channels), and the report
//! value sent before each action. Transport concerns stay outside this
//! boundary.

mod action;
mod base_url;
mod capabilities;
mod error;
mod identity;
mod ids;
mod policy;
mod report;

pub use action::ActionName;
pub use base_url::BaseUrl;
pub use capabilities::Capabilities;
pub use error::{ConfigurationError, ParseReportDetailError, ParseReportPolicyError};
pub use identity::AgentIdentity;
pub use ids::{AgentId, ReportId};
pub use policy::{ReportDetail, ReportPolicy};
pub use report::ReportPayload;
