//! `reqwest`-backed transport adapter.

use crate::agent::{
    domain::{BaseUrl, ConfigurationError},
    ports::{Transport, TransportError, TransportResult},
};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;
use tracing::{debug, info};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Tuning options for [`HttpTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTransportOptions {
    /// Upper bound for a whole request, response body included.
    pub request_timeout: Duration,
    /// Upper bound for establishing a connection.
    pub connect_timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for HttpTransportOptions {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: concat!("beamtracks/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

/// JSON-over-HTTP transport with a pooled client bound to one base URL.
///
/// The pool is created in [`HttpTransport::new`] and released by
/// [`Transport::close`] or on drop. Requests already in flight keep their
/// own client handle and finish normally.
#[derive(Debug)]
pub struct HttpTransport {
    base_url: BaseUrl,
    client: RwLock<Option<Client>>,
}

impl HttpTransport {
    /// Creates a transport for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::HttpClient`] when the underlying client
    /// cannot be built (for example when TLS initialisation fails).
    pub fn new(
        base_url: BaseUrl,
        options: &HttpTransportOptions,
    ) -> Result<Self, ConfigurationError> {
        let client = Client::builder()
            .timeout(options.request_timeout)
            .connect_timeout(options.connect_timeout)
            .user_agent(options.user_agent.as_str())
            .redirect(Policy::none())
            .build()
            .map_err(|err| ConfigurationError::HttpClient(err.to_string()))?;

        Ok(Self {
            base_url,
            client: RwLock::new(Some(client)),
        })
    }

    /// Returns the normalised base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the absolute URL a request to `path` is sent to.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        self.base_url.join(path)
    }

    /// Returns whether [`Transport::close`] has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.client
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    fn client(&self) -> TransportResult<Client> {
        self.client
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(TransportError::Closed)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, path: &str, body: &Value) -> TransportResult<Value> {
        let client = self.client()?;
        let url = self.url_for(path);
        debug!(%url, "sending POST");

        let response = client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                let timed_out = err.is_timeout();
                TransportError::network(url.clone(), err, timed_out)
            })?;

        let status = response.status();
        debug!(%url, status_code = status.as_u16(), "received response");
        if !status.is_success() {
            return Err(TransportError::Server {
                status_code: status.as_u16(),
                url,
            });
        }

        let bytes = response.bytes().await.map_err(|err| {
            let timed_out = err.is_timeout();
            TransportError::network(url.clone(), err, timed_out)
        })?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|err| TransportError::decode(url, err))
    }

    async fn close(&self) {
        let released = self
            .client
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if released.is_some() {
            info!(base_url = %self.base_url, "closed HTTP transport");
        }
    }
}
