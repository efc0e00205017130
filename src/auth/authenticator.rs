//! Authenticator implementations
//!
//! Builds authorization headers from a challenge and merges them into
//! outgoing requests.

use super::types::{Credentials, BASIC_SCHEME};
use crate::challenge::WwwAuthenticate;
use crate::error::{Error, Result};
use crate::headers::{Header, Headers, AUTHORIZATION};
use reqwest::RequestBuilder;
use tracing::debug;

/// Produces the headers that answer an authentication challenge
///
/// One implementation per scheme. Callers pick the implementation that
/// matches the challenge; an implementation handed a challenge for another
/// scheme fails with [`Error::UnsupportedScheme`].
pub trait Authenticator: Send + Sync {
    /// Headers to attach to the retried request
    fn headers(&self, challenge: &WwwAuthenticate) -> Result<Headers>;

    /// Merge the headers for `challenge` into a request builder
    ///
    /// Existing headers with the same name are replaced.
    fn apply(
        &self,
        request: RequestBuilder,
        challenge: &WwwAuthenticate,
    ) -> Result<RequestBuilder> {
        let headers = self.headers(challenge)?;
        if headers.is_empty() {
            return Ok(request);
        }
        Ok(request.headers(headers.to_header_map()?))
    }
}

/// HTTP Basic authenticator for a fixed username and password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuthenticator {
    credentials: Credentials,
}

impl BasicAuthenticator {
    /// Create a new Basic authenticator
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(username, password),
        }
    }

    /// Create a Basic authenticator from existing credentials
    pub fn from_credentials(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Credentials this authenticator answers with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl Authenticator for BasicAuthenticator {
    fn headers(&self, challenge: &WwwAuthenticate) -> Result<Headers> {
        let scheme = challenge.scheme();
        // Exact match: "basic" is rejected even though RFC 7235 would allow it
        if scheme != BASIC_SCHEME {
            debug!(scheme, "Rejecting challenge for unsupported scheme");
            return Err(Error::unsupported_scheme(scheme, challenge.value()));
        }

        debug!(
            realm = challenge.realm().unwrap_or_default(),
            "Answering Basic challenge"
        );
        Ok(Headers::from(Header::new(
            AUTHORIZATION,
            self.credentials.to_authorization(),
        )))
    }
}

/// Authenticator that sends no credentials
///
/// Answers every challenge with an empty header set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnonymousAuthenticator;

impl Authenticator for AnonymousAuthenticator {
    fn headers(&self, challenge: &WwwAuthenticate) -> Result<Headers> {
        debug!(
            scheme = challenge.scheme(),
            "No credentials configured, sending none"
        );
        Ok(Headers::new())
    }
}
