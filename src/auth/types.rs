//! Auth configuration types
//!
//! Credentials and the serialisable selector for which authenticator to use.

use super::authenticator::{AnonymousAuthenticator, Authenticator, BasicAuthenticator};
use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Scheme token for HTTP Basic authentication
pub const BASIC_SCHEME: &str = "Basic";

/// Username and password for Basic authentication
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create new credentials
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Password
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Base64 of `username:password`
    pub fn encode(&self) -> String {
        STANDARD.encode(format!("{}:{}", self.username, self.password))
    }

    /// Full Authorization header value, e.g. `Basic YWxpY2U6czNjcjN0`
    pub fn to_authorization(&self) -> String {
        format!("{BASIC_SCHEME} {}", self.encode())
    }

    /// Decode credentials from a `Basic ...` Authorization header value
    ///
    /// The decoded text is split at the first colon, so the password may
    /// itself contain colons.
    pub fn from_authorization(value: &str) -> Result<Self> {
        let encoded = value
            .strip_prefix(BASIC_SCHEME)
            .and_then(|rest| rest.strip_prefix(' '))
            .ok_or_else(|| Error::malformed_credentials("expected 'Basic' scheme"))?;

        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|e| Error::malformed_credentials(format!("invalid base64: {e}")))?;

        let text = String::from_utf8(decoded)
            .map_err(|_| Error::malformed_credentials("credentials are not valid UTF-8"))?;

        let (username, password) = text
            .split_once(':')
            .ok_or_else(|| Error::malformed_credentials("missing ':' separator"))?;

        Ok(Self::new(username, password))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// No credentials
    #[default]
    None,

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Literal password
        #[serde(default, skip_serializing_if = "Option::is_none")]
        password: Option<String>,
        /// Environment variable holding the password
        #[serde(default, skip_serializing_if = "Option::is_none")]
        password_env: Option<String>,
    },
}

impl AuthConfig {
    /// Basic config with a literal password
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: Some(password.into()),
            password_env: None,
        }
    }

    /// Build the authenticator this config describes
    ///
    /// Environment variables are read here, once.
    pub fn authenticator(&self) -> Result<Arc<dyn Authenticator>> {
        match self {
            AuthConfig::None => Ok(Arc::new(AnonymousAuthenticator)),

            AuthConfig::Basic {
                username,
                password,
                password_env,
            } => {
                let password = match (password, password_env) {
                    (Some(password), None) => password.clone(),
                    (None, Some(var)) => {
                        std::env::var(var).map_err(|_| Error::missing_env_var(var))?
                    }
                    (Some(_), Some(_)) => {
                        return Err(Error::config(
                            "Basic auth takes either 'password' or 'password_env', not both",
                        ))
                    }
                    (None, None) => {
                        return Err(Error::config(
                            "Basic auth requires 'password' or 'password_env'",
                        ))
                    }
                };
                Ok(Arc::new(BasicAuthenticator::new(username.clone(), password)))
            }
        }
    }
}
