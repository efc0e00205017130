//! CLI runner - executes commands

use crate::auth::{AnonymousAuthenticator, Authenticator, BasicAuthenticator, Credentials};
use crate::challenge::WwwAuthenticate;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::load_config;
use crate::error::{Error, Result};
use serde_json::json;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing to stdout
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Run the CLI command, writing to `out`
    pub fn run_to(&self, out: &mut impl Write) -> Result<()> {
        match &self.cli.command {
            Commands::Headers {
                challenge,
                username,
                password,
            } => self.headers(out, challenge, username.as_deref(), password.as_deref()),
            Commands::Parse { challenge } => self.parse(out, challenge),
            Commands::Decode { authorization } => self.decode(out, authorization),
        }
    }

    /// Pick the authenticator: flags, then config file, then anonymous
    fn authenticator(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Arc<dyn Authenticator>> {
        if let Some(username) = username {
            let password = password.ok_or_else(|| {
                Error::config(
                    "--password is required with --username (or set HTTP_CLIENT_AUTH_PASSWORD)",
                )
            })?;
            return Ok(Arc::new(BasicAuthenticator::new(username, password)));
        }

        if let Some(path) = &self.cli.config {
            return load_config(path)?.auth.authenticator();
        }

        info!("No credentials given, using anonymous authenticator");
        Ok(Arc::new(AnonymousAuthenticator))
    }

    /// Print headers answering a challenge
    fn headers(
        &self,
        out: &mut impl Write,
        challenge: &str,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<()> {
        let challenge = WwwAuthenticate::new(challenge);
        let headers = self.authenticator(username, password)?.headers(&challenge)?;

        match self.cli.format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&headers)?)?,
            OutputFormat::Pretty => write!(out, "{headers}")?,
        }
        Ok(())
    }

    /// Print the parsed challenge
    fn parse(&self, out: &mut impl Write, challenge: &str) -> Result<()> {
        let challenge = WwwAuthenticate::new(challenge);

        match self.cli.format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&challenge)?)?,
            OutputFormat::Pretty => {
                writeln!(out, "Scheme: {}", challenge.scheme())?;
                for param in challenge.params() {
                    writeln!(out, "  {} = {}", param.name, param.value)?;
                }
            }
        }
        Ok(())
    }

    /// Print decoded Basic credentials
    fn decode(&self, out: &mut impl Write, authorization: &str) -> Result<()> {
        let credentials = Credentials::from_authorization(authorization)?;

        match self.cli.format {
            OutputFormat::Json => {
                let doc = json!({
                    "username": credentials.username(),
                    "password": credentials.password(),
                });
                writeln!(out, "{doc}")?;
            }
            OutputFormat::Pretty => {
                writeln!(out, "Username: {}", credentials.username())?;
                writeln!(out, "Password: {}", credentials.password())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    fn run(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        Runner::new(cli).run_to(&mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_headers_with_flags() {
        let output = run(&[
            "http-client-auth",
            "headers",
            "--challenge",
            "Basic realm=\"registry\"",
            "-u",
            "alice",
            "-p",
            "s3cr3t",
        ])
        .unwrap();
        assert_eq!(output, "Authorization: Basic YWxpY2U6czNjcjN0\n");
    }

    #[test]
    fn test_headers_json() {
        let output = run(&[
            "http-client-auth",
            "-f",
            "json",
            "headers",
            "--challenge",
            "Basic",
            "-u",
            "alice",
            "-p",
            "s3cr3t",
        ])
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            json!([{"name": "Authorization", "value": "Basic YWxpY2U6czNjcjN0"}])
        );
    }

    #[test]
    fn test_headers_unsupported_scheme() {
        let err = run(&[
            "http-client-auth",
            "headers",
            "--challenge",
            "Digest realm=\"repo\"",
            "-u",
            "alice",
            "-p",
            "s3cr3t",
        ])
        .unwrap_err();
        assert!(matches!(err, Error::UnsupportedScheme { ref scheme, .. } if scheme == "Digest"));
    }

    #[test]
    fn test_headers_from_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "auth:\n  type: basic\n  username: bob\n  password: 'pa:ss'"
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let output = run(&[
            "http-client-auth",
            "-C",
            &path,
            "headers",
            "--challenge",
            "Basic",
        ])
        .unwrap();
        assert_eq!(output, "Authorization: Basic Ym9iOnBhOnNz\n");
    }

    #[test]
    fn test_headers_anonymous() {
        let output = run(&["http-client-auth", "headers", "--challenge", "Basic"]).unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn test_parse_pretty() {
        let output = run(&[
            "http-client-auth",
            "parse",
            "--challenge",
            "Basic realm=\"registry\", charset=UTF-8",
        ])
        .unwrap();
        assert_eq!(
            output,
            "Scheme: Basic\n  realm = registry\n  charset = UTF-8\n"
        );
    }

    #[test]
    fn test_parse_json() {
        let output = run(&[
            "http-client-auth",
            "--format",
            "json",
            "parse",
            "--challenge",
            "Basic realm=\"registry\"",
        ])
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["scheme"], "Basic");
        assert_eq!(value["params"][0]["name"], "realm");
        assert_eq!(value["params"][0]["value"], "registry");
    }

    #[test]
    fn test_decode() {
        let output = run(&[
            "http-client-auth",
            "decode",
            "--authorization",
            "Basic Ym9iOnBhOnNz",
        ])
        .unwrap();
        assert_eq!(output, "Username: bob\nPassword: pa:ss\n");
    }

    #[test]
    fn test_decode_malformed() {
        let err = run(&[
            "http-client-auth",
            "decode",
            "--authorization",
            "Bearer abc",
        ])
        .unwrap_err();
        assert!(matches!(err, Error::MalformedCredentials { .. }));
    }
}
