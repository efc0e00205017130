//! WWW-Authenticate challenge module
//!
//! Parse the challenge a server sends back with a `401 Unauthorized`.
//!
//! # Overview
//!
//! The challenge module provides:
//! - `WwwAuthenticate` - Scheme, auth-params and raw value of one challenge
//! - `AuthParam` - A single `name=value` pair following the scheme
//! - Lookup of the challenge in a `reqwest` response header map

mod parser;
mod types;

pub use parser::{parse_params, parse_scheme};
pub use types::{AuthParam, WwwAuthenticate};
