//! CLI argument definitions using clap
//!
//! Commands:
//! - taskdesk serve [--config <path>] [overrides...]
//! - taskdesk inspect --schema <schema> --snapshot <path>

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::negotiation::FailureGate;
use crate::observability::LogFormat;
use crate::schema::SchemaKind;

/// taskdesk - in-memory actor/assignment records over HTTP
#[derive(Parser, Debug)]
#[command(name = "taskdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Load a snapshot and print its collection counts
    Inspect {
        /// Schema the snapshot belongs to
        #[arg(long, value_enum, default_value_t = SchemaKind::Forestry)]
        schema: SchemaKind,

        /// Path to the snapshot file
        #[arg(long)]
        snapshot: PathBuf,
    },
}

/// Flags for `serve`; each one overrides the config file
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub schema: Option<SchemaKind>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,

    /// Seed snapshot
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub failure_gate: Option<FailureGate>,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
