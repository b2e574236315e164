//! CLI command implementations

use std::io::{self, Write};
use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{init_logging, Event};
use crate::schema::{Classroom, Forestry, Schema, SchemaKind};
use crate::store::{snapshot, StoreSummary};

use super::args::{Command, ServeArgs};
use super::errors::{CliError, CliResult};

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(args) => serve(args),
        Command::Inspect { schema, snapshot } => inspect(schema, &snapshot),
    }
}

/// Resolve the effective server config: file (or defaults), then flags
pub fn resolve_config(args: &ServeArgs) -> CliResult<HttpServerConfig> {
    let mut config = match &args.config {
        Some(path) => HttpServerConfig::load(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(schema) = args.schema {
        config.schema = schema;
    }
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(snapshot) = &args.snapshot {
        config.snapshot = Some(snapshot.clone());
    }
    if let Some(gate) = args.failure_gate {
        config.failure_gate = gate;
    }
    if let Some(format) = args.log_format {
        config.log_format = format;
    }

    // Flags may have broken what the file alone satisfied
    config.validate()?;
    Ok(config)
}

/// Start the HTTP server and block until shutdown
pub fn serve(args: ServeArgs) -> CliResult<()> {
    let config = resolve_config(&args)?;
    init_logging(&config.log_filter, config.log_format)?;

    tracing::info!(
        event = %Event::BootStart,
        version = env!("CARGO_PKG_VERSION"),
        "taskdesk starting"
    );
    tracing::info!(
        event = %Event::ConfigLoaded,
        source = args
            .config
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string()),
        schema = %config.schema,
        failure_gate = %config.failure_gate,
        "configuration loaded"
    );

    let server = HttpServer::with_config(config)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Load a snapshot and print per-collection counts as JSON
pub fn inspect(schema: SchemaKind, path: &Path) -> CliResult<()> {
    let summary = match schema {
        SchemaKind::Forestry => summarize::<Forestry>(path)?,
        SchemaKind::Classroom => summarize::<Classroom>(path)?,
    };

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &summary)?;
    writeln!(stdout)?;
    Ok(())
}

pub fn summarize<S: Schema>(path: &Path) -> CliResult<StoreSummary> {
    Ok(snapshot::load::<S>(path)?.summary())
}
