//! Challenge types

use crate::challenge::parser::{parse_params, parse_scheme};
use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue, WWW_AUTHENTICATE};
use serde::Serialize;
use std::fmt;

/// A single auth-param from a challenge, e.g. `realm="registry"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthParam {
    /// Parameter name as sent by the server
    pub name: String,
    /// Parameter value with quotes and escapes removed
    pub value: String,
}

/// Parsed `WWW-Authenticate` header value
///
/// Immutable once built. Authenticators read the scheme to decide whether
/// they can answer, and keep the raw value around for error messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WwwAuthenticate {
    /// Raw header value
    value: String,
    /// Scheme token (e.g., "Basic")
    scheme: String,
    /// Auth-params in order of appearance
    params: Vec<AuthParam>,
}

impl WwwAuthenticate {
    /// Parse a challenge from its raw header value
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let scheme = parse_scheme(&value).to_string();
        let params = parse_params(&value);
        tracing::trace!(%scheme, params = params.len(), "Parsed WWW-Authenticate challenge");
        Self {
            value,
            scheme,
            params,
        }
    }

    /// Parse a challenge from a `reqwest` header value
    pub fn from_header_value(value: &HeaderValue) -> Result<Self> {
        let value = value
            .to_str()
            .map_err(|e| Error::invalid_header(WWW_AUTHENTICATE.as_str(), e.to_string()))?;
        Ok(Self::new(value))
    }

    /// Find the challenge in a response's headers
    ///
    /// When the server sends several challenges, the first one wins.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self> {
        let value = headers
            .get(WWW_AUTHENTICATE)
            .ok_or(Error::MissingChallenge)?;
        Self::from_header_value(value)
    }

    /// Authentication scheme token
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Raw header value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// All auth-params
    pub fn params(&self) -> &[AuthParam] {
        &self.params
    }

    /// Look up an auth-param by name (case-insensitive)
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(|p| p.value.as_str())
    }

    /// Protection space the server asked for
    pub fn realm(&self) -> Option<&str> {
        self.param("realm")
    }
}

impl From<&str> for WwwAuthenticate {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for WwwAuthenticate {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for WwwAuthenticate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
