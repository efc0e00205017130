//! Error types for HTTP client authentication
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for HTTP client authentication
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Authentication Errors
    // ============================================================================
    /// The authenticator was asked to answer a challenge for a scheme it does not speak
    #[error("Unsupported scheme '{scheme}': {challenge}")]
    UnsupportedScheme { scheme: String, challenge: String },

    #[error("Malformed Basic credentials: {message}")]
    MalformedCredentials { message: String },

    // ============================================================================
    // Header Errors
    // ============================================================================
    #[error("Response carries no WWW-Authenticate header")]
    MissingChallenge,

    #[error("Invalid header '{name}': {message}")]
    InvalidHeader { name: String, message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Environment variable '{name}' is not set")]
    MissingEnvVar { name: String },

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an unsupported scheme error
    pub fn unsupported_scheme(scheme: impl Into<String>, challenge: impl Into<String>) -> Self {
        Self::UnsupportedScheme {
            scheme: scheme.into(),
            challenge: challenge.into(),
        }
    }

    /// Create a malformed credentials error
    pub fn malformed_credentials(message: impl Into<String>) -> Self {
        Self::MalformedCredentials {
            message: message.into(),
        }
    }

    /// Create an invalid header error
    pub fn invalid_header(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing environment variable error
    pub fn missing_env_var(name: impl Into<String>) -> Self {
        Self::MissingEnvVar { name: name.into() }
    }
}

/// Result type alias for HTTP client authentication
pub type Result<T> = std::result::Result<T, Error>;
