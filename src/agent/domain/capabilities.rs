//! Tools and channels an agent declares to the control plane.

use super::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Declared tool and channel names of an agent.
///
/// Names are trimmed, blank names are rejected, and duplicates collapse into
/// a single entry. Ordering is lexicographic so reports are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    tools: BTreeSet<String>,
    channels: BTreeSet<String>,
}

impl Capabilities {
    /// Creates an empty capability set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every tool in `names`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyToolName`] when any name is blank.
    pub fn with_tools<I, S>(mut self, names: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.add_tool(name)?;
        }
        Ok(self)
    }

    /// Adds every channel in `names`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyChannelName`] when any name is
    /// blank.
    pub fn with_channels<I, S>(mut self, names: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.add_channel(name)?;
        }
        Ok(self)
    }

    /// Adds a tool, returning `true` when it was not already declared.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyToolName`] when the name is blank.
    pub fn add_tool(&mut self, name: impl Into<String>) -> Result<bool, ConfigurationError> {
        let normalized = normalize(name).ok_or(ConfigurationError::EmptyToolName)?;
        Ok(self.tools.insert(normalized))
    }

    /// Adds a channel, returning `true` when it was not already declared.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyChannelName`] when the name is
    /// blank.
    pub fn add_channel(&mut self, name: impl Into<String>) -> Result<bool, ConfigurationError> {
        let normalized = normalize(name).ok_or(ConfigurationError::EmptyChannelName)?;
        Ok(self.channels.insert(normalized))
    }

    /// Removes a tool, returning `true` when it was declared.
    pub fn remove_tool(&mut self, name: &str) -> bool {
        self.tools.remove(name.trim())
    }

    /// Removes a channel, returning `true` when it was declared.
    pub fn remove_channel(&mut self, name: &str) -> bool {
        self.channels.remove(name.trim())
    }

    /// Returns whether the tool is declared.
    #[must_use]
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains(name.trim())
    }

    /// Returns whether the channel is declared.
    #[must_use]
    pub fn has_channel(&self, name: &str) -> bool {
        self.channels.contains(name.trim())
    }

    /// Returns the declared tools in sorted order.
    #[must_use]
    pub const fn tools(&self) -> &BTreeSet<String> {
        &self.tools
    }

    /// Returns the declared channels in sorted order.
    #[must_use]
    pub const fn channels(&self) -> &BTreeSet<String> {
        &self.channels
    }
}

fn normalize(name: impl Into<String>) -> Option<String> {
    let trimmed = name.into().trim().to_owned();
    (!trimmed.is_empty()).then_some(trimmed)
}
