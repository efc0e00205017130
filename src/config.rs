//! Client configuration
//!
//! YAML configuration naming the authenticator a client should use.
//!
//! ```yaml
//! auth:
//!   type: basic
//!   username: alice
//!   password_env: REGISTRY_PASSWORD
//! ```

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete client configuration loaded from YAML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Load a client configuration from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<ClientConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;
    tracing::debug!(path = %path.display(), "Loaded client config");
    load_config_from_str(&content)
}

/// Load a client configuration from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<ClientConfig> {
    let config: ClientConfig = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;

    validate_config(&config)?;
    Ok(config)
}

/// Validate a client configuration
fn validate_config(config: &ClientConfig) -> Result<()> {
    if let AuthConfig::Basic { username, .. } = &config.auth {
        if username.is_empty() {
            return Err(Error::config("Basic auth username cannot be empty"));
        }

        // A colon would split the username when the server decodes it
        if username.contains(':') {
            return Err(Error::config(format!(
                "Basic auth username cannot contain ':': {username}"
            )));
        }
    }

    Ok(())
}
