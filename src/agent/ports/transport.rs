//! Transport port for sending JSON requests to the control plane.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// JSON-over-HTTP contract bound to a fixed base URL.
///
/// Implementations must tolerate overlapping calls from concurrent tasks.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `body` to `path`, relative to the bound base URL, and returns
    /// the parsed response body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] when the request cannot be
    /// delivered, [`TransportError::Server`] for non-2xx responses,
    /// [`TransportError::Decode`] when a 2xx body is not JSON, or
    /// [`TransportError::Closed`] after [`Transport::close`].
    async fn post(&self, path: &str, body: &Value) -> TransportResult<Value>;

    /// Releases pooled connections. Later calls to [`Transport::post`] fail
    /// with [`TransportError::Closed`].
    async fn close(&self);
}

/// Errors returned by transport adapters.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The request could not be delivered (connection failure or timeout).
    #[error("network error sending request to {url}: {source}")]
    Network {
        /// Request URL.
        url: String,
        /// Underlying client error.
        source: Arc<dyn std::error::Error + Send + Sync>,
        /// Whether the failure was a timeout.
        timed_out: bool,
    },

    /// The control plane answered with a non-2xx status.
    #[error("server error: {url} responded with status {status_code}")]
    Server {
        /// HTTP status code.
        status_code: u16,
        /// Request URL.
        url: String,
    },

    /// A 2xx response body could not be parsed as JSON.
    #[error("invalid JSON response from {url}: {source}")]
    Decode {
        /// Request URL.
        url: String,
        /// Underlying parse error.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// The transport was closed before the request was issued.
    #[error("transport is closed")]
    Closed,
}

impl TransportError {
    /// Wraps a delivery failure.
    pub fn network(
        url: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
        timed_out: bool,
    ) -> Self {
        Self::Network {
            url: url.into(),
            source: Arc::new(err),
            timed_out,
        }
    }

    /// Wraps a response parsing failure.
    pub fn decode(
        url: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Decode {
            url: url.into(),
            source: Arc::new(err),
        }
    }

    /// Returns the HTTP status code for server errors.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Server { status_code, .. } => Some(*status_code),
            Self::Network { .. } | Self::Decode { .. } | Self::Closed => None,
        }
    }

    /// Returns whether the failure was a request timeout.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Network { timed_out: true, .. })
    }
}
