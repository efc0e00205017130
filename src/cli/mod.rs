//! CLI module
//!
//! Command-line interface for inspecting and answering challenges.
//!
//! # Commands
//!
//! - `headers` - Print the headers that answer a challenge
//! - `parse` - Show the scheme and params of a challenge
//! - `decode` - Decode a Basic Authorization value

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
