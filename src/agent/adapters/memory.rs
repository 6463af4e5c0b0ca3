//! In-memory transport adapter for tests and local flows.

use crate::agent::{
    domain::BaseUrl,
    ports::{Transport, TransportError, TransportResult},
};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock};

/// A request observed by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Absolute URL the request would have been sent to.
    pub url: String,
    /// JSON request body.
    pub body: Value,
}

/// Transport that records requests instead of sending them.
///
/// Replies come from a queue of scripted responses; once the queue is empty
/// every request is answered with `{}`. Clones share state, so a test can
/// keep a handle while the agent owns another.
#[derive(Debug, Clone)]
pub struct RecordingTransport {
    base_url: BaseUrl,
    state: Arc<RwLock<RecordingState>>,
}

#[derive(Debug, Default)]
struct RecordingState {
    requests: Vec<RecordedRequest>,
    scripted: VecDeque<TransportResult<Value>>,
    closed: bool,
}

impl RecordingTransport {
    /// Creates a recording transport bound to `base_url`.
    #[must_use]
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            state: Arc::new(RwLock::new(RecordingState::default())),
        }
    }

    /// Queues a successful response body for the next unanswered request.
    pub fn respond_with(&self, body: Value) {
        self.write_state().scripted.push_back(Ok(body));
    }

    /// Queues a failure for the next unanswered request.
    pub fn fail_with(&self, error: TransportError) {
        self.write_state().scripted.push_back(Err(error));
    }

    /// Returns every request recorded so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .requests
            .clone()
    }

    /// Returns whether [`Transport::close`] has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .closed
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, RecordingState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post(&self, path: &str, body: &Value) -> TransportResult<Value> {
        let mut state = self.write_state();
        if state.closed {
            return Err(TransportError::Closed);
        }

        state.requests.push(RecordedRequest {
            url: self.base_url.join(path),
            body: body.clone(),
        });
        state.scripted.pop_front().unwrap_or_else(|| Ok(json!({})))
    }

    async fn close(&self) {
        self.write_state().closed = true;
    }
}
