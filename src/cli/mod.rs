//! CLI module for taskdesk
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server for one schema
//! - inspect: Print collection counts of a snapshot

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ServeArgs};
pub use commands::{inspect, resolve_config, run, run_command, serve, summarize};
pub use errors::{CliError, CliErrorCode, CliResult};
