//! Name of a reported agent action.

use std::borrow::Cow;
use std::fmt;

/// Name sent as the `method` field of a liveness report.
///
/// The name is carried explicitly alongside the wrapped action rather than
/// derived from the function it wraps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionName(Cow<'static, str>);

impl ActionName {
    /// Creates an action name.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ActionName {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ActionName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for ActionName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
