//! Error types for agent configuration and report option parsing.

use thiserror::Error;

/// Errors returned while constructing an agent or its domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The agent identifier is empty or only whitespace.
    #[error("agent id must not be empty")]
    EmptyAgentId,

    /// The agent identifier has leading or trailing whitespace.
    #[error("agent id '{0}' must not have leading or trailing whitespace")]
    AgentIdHasSurroundingWhitespace(String),

    /// The control plane base URL is empty after trimming.
    #[error("base URL must not be empty")]
    EmptyBaseUrl,

    /// The control plane base URL could not be parsed as an absolute URL.
    #[error("base URL '{value}' is invalid: {reason}")]
    InvalidBaseUrl {
        /// Raw value supplied by the caller.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The control plane base URL uses a scheme other than `http` or `https`.
    #[error("base URL '{0}' must use the http or https scheme")]
    UnsupportedScheme(String),

    /// The control plane base URL carries a query string or fragment, which
    /// cannot be joined with request paths.
    #[error("base URL '{0}' must not contain a query string or fragment")]
    BaseUrlHasQueryOrFragment(String),

    /// The control plane base URL embeds a username or password. The value
    /// is not echoed so the credentials stay out of logs.
    #[error("base URL must not contain user credentials")]
    BaseUrlHasCredentials,

    /// A tool name is empty after trimming.
    #[error("tool name must not be empty")]
    EmptyToolName,

    /// A channel name is empty after trimming.
    #[error("channel name must not be empty")]
    EmptyChannelName,

    /// A required configuration setting is absent.
    #[error("missing required setting {0}")]
    MissingSetting(&'static str),

    /// A configuration setting is present but cannot be interpreted.
    #[error("invalid value '{value}' for setting {name}")]
    InvalidSetting {
        /// Setting name.
        name: &'static str,
        /// Raw value that failed to parse.
        value: String,
    },

    /// The HTTP client backing the transport could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Error returned while parsing a report policy from configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown report policy: {0}")]
pub struct ParseReportPolicyError(pub String);

/// Error returned while parsing a report detail level from configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown report detail: {0}")]
pub struct ParseReportDetailError(pub String);
