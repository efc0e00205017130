//! # HTTP Client Auth
//!
//! Builds the request headers that answer a server's `WWW-Authenticate`
//! challenge.
//!
//! ## Features
//!
//! - **Challenge Parsing**: Scheme, auth-params and raw value of a `WWW-Authenticate` header
//! - **Basic Auth**: `Authorization: Basic <base64(username:password)>` for `Basic` challenges
//! - **Pluggable Schemes**: One `Authenticator` implementation per scheme
//! - **reqwest Integration**: Merge answers straight into a `RequestBuilder`
//!
//! ## Quick Start
//!
//! ```rust
//! use http_client_auth::{Authenticator, BasicAuthenticator, WwwAuthenticate};
//!
//! let auth = BasicAuthenticator::new("alice", "s3cr3t");
//! let challenge = WwwAuthenticate::new("Basic realm=\"registry\"");
//!
//! let headers = auth.headers(&challenge).unwrap();
//! assert_eq!(headers.get("Authorization"), Some("Basic YWxpY2U6czNjcjN0"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! 401 + WWW-Authenticate ──► WwwAuthenticate ──► Authenticator::headers ──► Headers
//!                               (challenge)        Basic | Anonymous        (retried request)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// WWW-Authenticate challenge parsing
pub mod challenge;

/// Ordered header sets
pub mod headers;

/// Authenticator implementations
pub mod auth;

/// Client configuration loading
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::{AnonymousAuthenticator, AuthConfig, Authenticator, BasicAuthenticator, Credentials};
pub use challenge::WwwAuthenticate;
pub use error::{Error, Result};
pub use headers::{Header, Headers};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
