//! Authentication module
//!
//! Supports: Basic, Anonymous
//!
//! An `Authenticator` turns a server's `WWW-Authenticate` challenge into the
//! headers the retried request needs. Authenticators are stateless after
//! construction and can be shared across threads.

mod authenticator;
mod types;

pub use authenticator::{AnonymousAuthenticator, Authenticator, BasicAuthenticator};
pub use types::{AuthConfig, Credentials, BASIC_SCHEME};
