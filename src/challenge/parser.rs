//! Challenge parser
//!
//! Splits a raw `WWW-Authenticate` value into its scheme token and
//! auth-params. Parsing is lenient: anything that does not look like a
//! `name=value` pair is skipped rather than rejected.

use crate::challenge::types::AuthParam;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for auth-params: name="quoted value" or name=token
static PARAM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([!#$%&'*+.^_`|~0-9A-Za-z-]+)\s*=\s*(?:"((?:[^"\\]|\\.)*)"|([^\s,=][^\s,]*))"#)
        .unwrap()
});

/// Extract the scheme token from a raw challenge value
///
/// The scheme is everything before the first whitespace of the trimmed
/// value. An empty value yields an empty scheme.
pub fn parse_scheme(value: &str) -> &str {
    value.split_whitespace().next().unwrap_or("")
}

/// Extract the auth-params following the scheme, in order of appearance
pub fn parse_params(value: &str) -> Vec<AuthParam> {
    let trimmed = value.trim_start();
    let rest = &trimmed[parse_scheme(trimmed).len()..];

    PARAM_REGEX
        .captures_iter(rest)
        .map(|caps| {
            let name = caps[1].to_string();
            let value = match (caps.get(2), caps.get(3)) {
                (Some(quoted), _) => unescape(quoted.as_str()),
                (None, Some(token)) => token.as_str().to_string(),
                (None, None) => String::new(),
            };
            AuthParam { name, value }
        })
        .collect()
}

/// Resolve quoted-pairs (`\x` becomes `x`)
fn unescape(quoted: &str) -> String {
    let mut out = String::with_capacity(quoted.len());
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}
