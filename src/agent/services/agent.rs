//! The agent: identity, capabilities, and an owned control plane transport.

use super::{AgentConfig, ReportingOptions};
use crate::agent::{
    adapters::HttpTransport,
    domain::{AgentId, AgentIdentity, BaseUrl, Capabilities, ConfigurationError},
    ports::Transport,
};
use mockable::{Clock, DefaultClock};
use std::sync::{PoisonError, RwLock};

/// An addressable unit of work that reports its liveness to the control
/// plane.
///
/// The base agent performs no domain logic. Concrete agents embed one and
/// expose their own actions through
/// [`AgentBehaviour`](super::AgentBehaviour).
///
/// All operations take `&self`, so one agent can serve overlapping tasks.
/// Capability changes are visible to reports built after they complete.
#[derive(Debug)]
pub struct Agent<T = HttpTransport, C = DefaultClock>
where
    T: Transport,
    C: Clock + Send + Sync,
{
    identity: AgentIdentity,
    capabilities: RwLock<Capabilities>,
    transport: T,
    clock: C,
    reporting: ReportingOptions,
}

impl Agent {
    /// Builds an agent that talks HTTP to the configured control plane.
    ///
    /// Identity and capabilities are validated before the HTTP client is
    /// created, so an invalid configuration never allocates a connection
    /// pool.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the agent id, base URL, or any
    /// capability name is invalid, or when the HTTP client cannot be built.
    pub fn connect(config: AgentConfig) -> Result<Self, ConfigurationError> {
        let AgentConfig {
            agent_id,
            base_url,
            tools,
            channels,
            transport,
            reporting,
        } = config;

        let identity = AgentIdentity::new(AgentId::new(agent_id)?, BaseUrl::parse(base_url)?);
        let capabilities = Capabilities::new()
            .with_tools(tools)?
            .with_channels(channels)?;
        let http = HttpTransport::new(identity.base_url().clone(), &transport)?;

        Ok(Self::new(identity, http, DefaultClock)
            .with_capabilities(capabilities)
            .with_reporting(reporting))
    }

    /// Builds an agent from raw id and base URL with default options.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Agent::connect`].
    pub fn from_parts(
        agent_id: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        Self::connect(AgentConfig::new(agent_id, base_url))
    }
}

impl<T, C> Agent<T, C>
where
    T: Transport,
    C: Clock + Send + Sync,
{
    /// Creates an agent with no capabilities and default reporting options.
    #[must_use]
    pub fn new(identity: AgentIdentity, transport: T, clock: C) -> Self {
        Self {
            identity,
            capabilities: RwLock::new(Capabilities::new()),
            transport,
            clock,
            reporting: ReportingOptions::default(),
        }
    }

    /// Replaces the declared capabilities.
    #[must_use]
    pub fn with_capabilities(self, capabilities: Capabilities) -> Self {
        Self {
            capabilities: RwLock::new(capabilities),
            ..self
        }
    }

    /// Replaces the reporting options.
    #[must_use]
    pub fn with_reporting(self, reporting: ReportingOptions) -> Self {
        Self { reporting, ..self }
    }

    /// Returns the agent identity.
    #[must_use]
    pub const fn identity(&self) -> &AgentIdentity {
        &self.identity
    }

    /// Returns the agent identifier.
    #[must_use]
    pub const fn agent_id(&self) -> &AgentId {
        self.identity.agent_id()
    }

    /// Returns the normalised control plane base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        self.identity.base_url()
    }

    /// Returns a snapshot of the declared capabilities.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the reporting options.
    #[must_use]
    pub const fn reporting(&self) -> &ReportingOptions {
        &self.reporting
    }

    /// Returns the owned transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub(super) const fn clock(&self) -> &C {
        &self.clock
    }

    /// Declares a tool, returning `true` when it was not already declared.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyToolName`] when the name is blank.
    pub fn register_tool(&self, name: impl Into<String>) -> Result<bool, ConfigurationError> {
        self.capabilities
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .add_tool(name)
    }

    /// Withdraws a tool, returning `true` when it was declared.
    pub fn unregister_tool(&self, name: &str) -> bool {
        self.capabilities
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove_tool(name)
    }

    /// Declares a channel, returning `true` when it was not already
    /// declared.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyChannelName`] when the name is
    /// blank.
    pub fn register_channel(&self, name: impl Into<String>) -> Result<bool, ConfigurationError> {
        self.capabilities
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .add_channel(name)
    }

    /// Withdraws a channel, returning `true` when it was declared.
    pub fn unregister_channel(&self, name: &str) -> bool {
        self.capabilities
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove_channel(name)
    }

    /// Releases the transport's pooled connections.
    ///
    /// Reports attempted afterwards fail with
    /// [`TransportError::Closed`](crate::agent::ports::TransportError::Closed).
    pub async fn close(&self) {
        self.transport.close().await;
    }
}
