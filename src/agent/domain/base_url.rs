//! Normalised control plane base URL.

use super::ConfigurationError;
use reqwest::Url;
use std::fmt;

/// Absolute `http`/`https` base URL with trailing slashes removed.
///
/// Normalisation happens once, here. Every request URL is derived from the
/// stored value through [`BaseUrl::join`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Parses and normalises a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyBaseUrl`] for blank input,
    /// [`ConfigurationError::InvalidBaseUrl`] when the value is not an
    /// absolute URL, [`ConfigurationError::UnsupportedScheme`] for schemes
    /// other than `http` and `https`, or
    /// [`ConfigurationError::BaseUrlHasQueryOrFragment`] when the URL carries
    /// a query string or fragment.
    pub fn parse(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigurationError::EmptyBaseUrl);
        }

        let url = Url::parse(trimmed).map_err(|err| ConfigurationError::InvalidBaseUrl {
            value: raw.clone(),
            reason: err.to_string(),
        })?;

        if !url.username().is_empty() || url.password().is_some() {
            return Err(ConfigurationError::BaseUrlHasCredentials);
        }

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigurationError::UnsupportedScheme(raw));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(ConfigurationError::BaseUrlHasQueryOrFragment(raw));
        }

        Ok(Self(url.as_str().trim_end_matches('/').to_owned()))
    }

    /// Joins a request path onto the base URL with exactly one separating
    /// slash.
    ///
    /// Leading slashes on `path` are dropped; anything after them, including
    /// a trailing slash, is kept verbatim.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }

    /// Returns the normalised URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
