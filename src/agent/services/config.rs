//! Agent configuration, built in code or read from the environment.

use super::ReportingOptions;
use crate::agent::{
    adapters::HttpTransportOptions,
    domain::{ConfigurationError, ReportDetail, ReportPolicy},
};
use std::collections::HashMap;
use std::env::VarError;
use std::time::Duration;

/// Environment variable holding the agent identifier.
pub const ENV_AGENT_ID: &str = "BEAMTRACKS_AGENT_ID";
/// Environment variable holding the control plane base URL.
pub const ENV_BASE_URL: &str = "BEAMTRACKS_BASE_URL";
/// Environment variable holding comma-separated tool names.
pub const ENV_TOOLS: &str = "BEAMTRACKS_TOOLS";
/// Environment variable holding comma-separated channel names.
pub const ENV_CHANNELS: &str = "BEAMTRACKS_CHANNELS";
/// Environment variable holding the request timeout in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "BEAMTRACKS_TIMEOUT_MS";
/// Environment variable holding the report failure policy.
pub const ENV_REPORT_POLICY: &str = "BEAMTRACKS_REPORT_POLICY";
/// Environment variable holding the report detail level.
pub const ENV_REPORT_DETAIL: &str = "BEAMTRACKS_REPORT_DETAIL";

const SETTINGS: [&str; 7] = [
    ENV_AGENT_ID,
    ENV_BASE_URL,
    ENV_TOOLS,
    ENV_CHANNELS,
    ENV_TIMEOUT_MS,
    ENV_REPORT_POLICY,
    ENV_REPORT_DETAIL,
];

/// Everything needed to build an HTTP-backed [`Agent`](super::Agent).
///
/// Values are kept raw here and validated by
/// [`Agent::connect`](super::Agent::connect).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    /// Caller-supplied agent identifier.
    pub agent_id: String,
    /// Control plane base URL.
    pub base_url: String,
    /// Initially declared tools.
    pub tools: Vec<String>,
    /// Initially declared channels.
    pub channels: Vec<String>,
    /// HTTP client tuning.
    pub transport: HttpTransportOptions,
    /// Report path, policy, and detail level.
    pub reporting: ReportingOptions,
}

impl AgentConfig {
    /// Creates a configuration with no capabilities and default options.
    #[must_use]
    pub fn new(agent_id: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            base_url: base_url.into(),
            tools: Vec::new(),
            channels: Vec::new(),
            transport: HttpTransportOptions::default(),
            reporting: ReportingOptions::default(),
        }
    }

    /// Sets the initially declared tools.
    #[must_use]
    pub fn with_tools(mut self, tools: impl IntoIterator<Item = String>) -> Self {
        self.tools = tools.into_iter().collect();
        self
    }

    /// Sets the initially declared channels.
    #[must_use]
    pub fn with_channels(mut self, channels: impl IntoIterator<Item = String>) -> Self {
        self.channels = channels.into_iter().collect();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.transport.request_timeout = timeout;
        self
    }

    /// Replaces the reporting options.
    #[must_use]
    pub fn with_reporting(mut self, reporting: ReportingOptions) -> Self {
        self.reporting = reporting;
        self
    }

    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidSetting`] when a variable is
    /// set but not valid Unicode, and otherwise the same errors as
    /// [`AgentConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let mut values = HashMap::new();
        for name in SETTINGS {
            if let Some(value) = env_setting(name, std::env::var(name))? {
                values.insert(name, value);
            }
        }
        Self::from_lookup(|key| values.get(key).cloned())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingSetting`] when the agent id or
    /// base URL is absent, and [`ConfigurationError::InvalidSetting`] when
    /// the timeout, policy, or detail level cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let agent_id =
            lookup(ENV_AGENT_ID).ok_or(ConfigurationError::MissingSetting(ENV_AGENT_ID))?;
        let base_url =
            lookup(ENV_BASE_URL).ok_or(ConfigurationError::MissingSetting(ENV_BASE_URL))?;

        let mut config = Self::new(agent_id, base_url)
            .with_tools(lookup(ENV_TOOLS).map(|raw| split_list(&raw)).unwrap_or_default())
            .with_channels(
                lookup(ENV_CHANNELS)
                    .map(|raw| split_list(&raw))
                    .unwrap_or_default(),
            );

        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|value| *value > 0)
                .ok_or_else(|| invalid(ENV_TIMEOUT_MS, &raw))?;
            config.transport.request_timeout = Duration::from_millis(millis);
        }

        if let Some(raw) = lookup(ENV_REPORT_POLICY) {
            config.reporting.policy = ReportPolicy::try_from(raw.as_str())
                .map_err(|_| invalid(ENV_REPORT_POLICY, &raw))?;
        }

        if let Some(raw) = lookup(ENV_REPORT_DETAIL) {
            config.reporting.detail = ReportDetail::try_from(raw.as_str())
                .map_err(|_| invalid(ENV_REPORT_DETAIL, &raw))?;
        }

        Ok(config)
    }
}

fn env_setting(
    name: &'static str,
    read: Result<String, VarError>,
) -> Result<Option<String>, ConfigurationError> {
    match read {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(invalid(name, &raw.to_string_lossy())),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

fn invalid(name: &'static str, value: &str) -> ConfigurationError {
    ConfigurationError::InvalidSetting {
        name,
        value: value.to_owned(),
    }
}
