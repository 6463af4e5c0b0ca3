//! Liveness reporting around agent actions.
//!
//! A reported action sends a ping describing the agent and the action to the
//! control plane, waits for it to complete, and only then runs the action
//! body. Three entry points share that behaviour:
//!
//! - [`Agent::run_reported`] wraps a single body closure;
//! - [`AgentBehaviour::reported`] does the same for concrete agent types
//!   that embed an [`Agent`];
//! - [`ReportedAction`] binds a name to a reusable action so it can be
//!   invoked many times on any agent.
//!
//! Under [`ReportPolicy::FailClosed`] a failed report aborts the action and
//! the caller receives the transport error. Under
//! [`ReportPolicy::FailOpen`] the failure is logged and the body runs.

use super::Agent;
use crate::agent::{
    domain::{ActionName, ReportDetail, ReportPayload, ReportPolicy},
    ports::{Transport, TransportError, TransportResult},
};
use mockable::Clock;
use serde_json::Value;
use std::future::Future;
use tracing::{debug, warn};

/// Default path liveness reports are posted to.
pub const DEFAULT_REPORT_PATH: &str = "/ping";

/// Where reports go, how much they carry, and what a failure means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportingOptions {
    /// Path relative to the control plane base URL.
    pub path: String,
    /// Behaviour when a report cannot be delivered.
    pub policy: ReportPolicy,
    /// Fields included in the report body.
    pub detail: ReportDetail,
}

impl Default for ReportingOptions {
    fn default() -> Self {
        Self {
            path: DEFAULT_REPORT_PATH.to_owned(),
            policy: ReportPolicy::default(),
            detail: ReportDetail::default(),
        }
    }
}

impl ReportingOptions {
    /// Sets the failure policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: ReportPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the report detail level.
    #[must_use]
    pub const fn with_detail(mut self, detail: ReportDetail) -> Self {
        self.detail = detail;
        self
    }

    /// Sets the report path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}

impl<T, C> Agent<T, C>
where
    T: Transport,
    C: Clock + Send + Sync,
{
    /// Builds the report for `action` from the current identity and a
    /// capability snapshot.
    #[must_use]
    pub fn build_report(&self, action: ActionName) -> ReportPayload {
        let capabilities = self.capabilities();
        ReportPayload::new(self.identity(), &capabilities, action, self.clock())
    }

    /// Sends a liveness report for `action` and returns the control plane's
    /// response body.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`TransportError`] unchanged.
    pub async fn report(&self, action: &ActionName) -> TransportResult<Value> {
        let payload = self.build_report(action.clone());
        let body = payload.to_wire(self.reporting().detail);
        debug!(
            agent_id = %payload.agent_id(),
            method = %payload.method(),
            report_id = %payload.report_id(),
            "sending liveness report"
        );
        self.transport().post(&self.reporting().path, &body).await
    }

    /// Reports `action`, then runs `body`.
    ///
    /// `body` is only invoked after the report completes. Dropping the
    /// returned future before then guarantees the body never starts.
    ///
    /// # Errors
    ///
    /// Under [`ReportPolicy::FailClosed`] a report failure is returned as
    /// `E::from(TransportError)` without running `body`. Otherwise returns
    /// whatever `body` returns.
    pub async fn run_reported<N, F, Fut, R, E>(&self, action: N, body: F) -> Result<R, E>
    where
        N: Into<ActionName>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<R, E>>,
        E: From<TransportError>,
    {
        let name = action.into();
        if let Err(err) = self.report(&name).await {
            match self.reporting().policy {
                ReportPolicy::FailClosed => {
                    warn!(
                        agent_id = %self.agent_id(),
                        method = %name,
                        error = %err,
                        "liveness report failed, action aborted"
                    );
                    return Err(E::from(err));
                }
                ReportPolicy::FailOpen => {
                    warn!(
                        agent_id = %self.agent_id(),
                        method = %name,
                        error = %err,
                        "liveness report failed, running action anyway"
                    );
                }
            }
        }
        body().await
    }
}

/// Extension point for concrete agents built on top of an [`Agent`].
///
/// Implementors only provide [`AgentBehaviour::agent`]; every action that
/// should announce itself goes through [`AgentBehaviour::reported`].
///
/// ```no_run
/// use beamtracks::agent::{
///     ports::TransportError,
///     services::{Agent, AgentBehaviour},
/// };
///
/// struct Heartbeat {
///     agent: Agent,
/// }
///
/// impl AgentBehaviour for Heartbeat {
///     type Transport = beamtracks::agent::adapters::HttpTransport;
///     type Clock = mockable::DefaultClock;
///
///     fn agent(&self) -> &Agent {
///         &self.agent
///     }
/// }
///
/// impl Heartbeat {
///     async fn heartbeat(&self) -> Result<(), TransportError> {
///         self.reported("heartbeat", || async { Ok(()) }).await
///     }
/// }
/// ```
pub trait AgentBehaviour: Send + Sync {
    /// Transport owned by the embedded agent.
    type Transport: Transport;
    /// Clock used to timestamp reports.
    type Clock: Clock + Send + Sync;

    /// Returns the embedded agent.
    fn agent(&self) -> &Agent<Self::Transport, Self::Clock>;

    /// Reports `action` through the embedded agent, then runs `body`.
    ///
    /// See [`Agent::run_reported`] for ordering and failure semantics.
    fn reported<N, F, Fut, R, E>(
        &self,
        action: N,
        body: F,
    ) -> impl Future<Output = Result<R, E>> + Send
    where
        N: Into<ActionName> + Send,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<R, E>> + Send,
        R: Send,
        E: From<TransportError> + Send,
    {
        self.agent().run_reported(action, body)
    }
}

impl<T, C> AgentBehaviour for Agent<T, C>
where
    T: Transport,
    C: Clock + Send + Sync,
{
    type Transport = T;
    type Clock = C;

    fn agent(&self) -> &Self {
        self
    }
}

/// A named action that reports itself every time it is called.
///
/// The name is stored next to the action and sent verbatim as the report's
/// `method`. Each instance holds only its name and function; all mutable
/// state lives in the agent it is called on.
#[derive(Debug, Clone)]
pub struct ReportedAction<F> {
    name: ActionName,
    action: F,
}

impl<F> ReportedAction<F> {
    /// Wraps `action` under `name`.
    #[must_use]
    pub fn new(name: impl Into<ActionName>, action: F) -> Self {
        Self {
            name: name.into(),
            action,
        }
    }

    /// Returns the reported name.
    #[must_use]
    pub const fn name(&self) -> &ActionName {
        &self.name
    }

    /// Reports this action on `agent`, then invokes it with `args`.
    ///
    /// # Errors
    ///
    /// Same as [`Agent::run_reported`].
    pub async fn call<'a, A, Args, Fut, R, E>(&self, agent: &'a A, args: Args) -> Result<R, E>
    where
        A: AgentBehaviour,
        F: Fn(&'a A, Args) -> Fut,
        Fut: Future<Output = Result<R, E>>,
        E: From<TransportError>,
    {
        agent
            .agent()
            .run_reported(self.name.clone(), || (self.action)(agent, args))
            .await
    }
}
