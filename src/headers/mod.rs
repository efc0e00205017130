//! Header set module
//!
//! An ordered list of `name: value` pairs that an authenticator hands back
//! to the HTTP layer for merging into the retried request.

mod types;

pub use types::{Header, Headers, AUTHORIZATION};
