//! Immutable agent identity.

use super::{AgentId, BaseUrl, ConfigurationError};

/// Who an agent is and where its control plane lives.
///
/// Created once when the agent is built and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentIdentity {
    agent_id: AgentId,
    base_url: BaseUrl,
}

impl AgentIdentity {
    /// Creates an identity from already validated parts.
    #[must_use]
    pub const fn new(agent_id: AgentId, base_url: BaseUrl) -> Self {
        Self { agent_id, base_url }
    }

    /// Validates raw inputs and creates an identity.
    ///
    /// # Errors
    ///
    /// Returns validation errors from [`AgentId::new`] and
    /// [`BaseUrl::parse`].
    pub fn parse(
        agent_id: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self::new(AgentId::new(agent_id)?, BaseUrl::parse(base_url)?))
    }

    /// Returns the agent identifier.
    #[must_use]
    pub const fn agent_id(&self) -> &AgentId {
        &self.agent_id
    }

    /// Returns the normalised control plane base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }
}
