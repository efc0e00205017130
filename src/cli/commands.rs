//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build Authorization headers for WWW-Authenticate challenges
#[derive(Parser, Debug)]
#[command(name = "http-client-auth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the headers that answer a challenge
    Headers {
        /// Raw WWW-Authenticate header value
        #[arg(long)]
        challenge: String,

        /// Username (takes precedence over the config file)
        #[arg(short, long)]
        username: Option<String>,

        /// Password for --username
        #[arg(short, long, env = "HTTP_CLIENT_AUTH_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Show the scheme and params of a challenge
    Parse {
        /// Raw WWW-Authenticate header value
        #[arg(long)]
        challenge: String,
    },

    /// Decode a Basic Authorization header value
    Decode {
        /// Authorization header value, e.g. "Basic YWxpY2U6czNjcjN0"
        #[arg(long)]
        authorization: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Human-readable output
    Pretty,
}
