//! Reporting options: failure policy and payload detail level.

use super::{ParseReportDetailError, ParseReportPolicyError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What happens to a reported action when its liveness report fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPolicy {
    /// The action body does not run and the transport error is returned.
    #[default]
    FailClosed,
    /// The failure is logged and the action body runs anyway.
    FailOpen,
}

impl ReportPolicy {
    /// Returns the canonical configuration representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FailClosed => "fail_closed",
            Self::FailOpen => "fail_open",
        }
    }
}

impl fmt::Display for ReportPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ReportPolicy {
    type Error = ParseReportPolicyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "fail_closed" => Ok(Self::FailClosed),
            "fail_open" => Ok(Self::FailOpen),
            _ => Err(ParseReportPolicyError(value.to_owned())),
        }
    }
}

/// Which fields a liveness report carries on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportDetail {
    /// `agent_id` and `method` only.
    #[default]
    Minimal,
    /// Adds the declared `tools` and `channels`.
    WithCapabilities,
    /// Adds capabilities, `timestamp`, and `report_id`.
    Full,
}

impl ReportDetail {
    /// Returns the canonical configuration representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::WithCapabilities => "with_capabilities",
            Self::Full => "full",
        }
    }

    /// Returns whether tools and channels are included.
    #[must_use]
    pub const fn includes_capabilities(self) -> bool {
        matches!(self, Self::WithCapabilities | Self::Full)
    }

    /// Returns whether the timestamp and report identifier are included.
    #[must_use]
    pub const fn includes_metadata(self) -> bool {
        matches!(self, Self::Full)
    }
}

impl fmt::Display for ReportDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ReportDetail {
    type Error = ParseReportDetailError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "minimal" => Ok(Self::Minimal),
            "with_capabilities" => Ok(Self::WithCapabilities),
            "full" => Ok(Self::Full),
            _ => Err(ParseReportDetailError(value.to_owned())),
        }
    }
}
