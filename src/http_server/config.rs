//! HTTP Server Configuration
//!
//! Loaded from a JSON file; every field has a default, so `{}` is a
//! valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::negotiation::FailureGate;
use crate::observability::{parse_filter, LogFormat};
use crate::schema::SchemaKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Which record schema this instance serves (default: forestry)
    #[serde(default)]
    pub schema: SchemaKind,

    /// Seed snapshot; the store starts empty without one
    #[serde(default)]
    pub snapshot: Option<PathBuf>,

    /// Polarity of negotiated failure signaling
    #[serde(default)]
    pub failure_gate: FailureGate,

    /// CORS allowed origins (default: empty, meaning permissive)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Log filter directive (default: "info")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            schema: SchemaKind::default(),
            snapshot: None,
            failure_gate: FailureGate::default(),
            cors_origins: Vec::new(),
            log_filter: default_log_filter(),
            log_format: LogFormat::default(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: HttpServerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be > 0".to_string()));
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid("host must not be empty".to_string()));
        }

        if let Some(snapshot) = &self.snapshot {
            if !snapshot.is_file() {
                return Err(ConfigError::Invalid(format!(
                    "snapshot {:?} does not exist",
                    snapshot
                )));
            }
        }

        for origin in &self.cors_origins {
            if origin.parse::<HeaderValue>().is_err() {
                return Err(ConfigError::Invalid(format!(
                    "cors origin {:?} is not a valid header value",
                    origin
                )));
            }
        }

        parse_filter(&self.log_filter)
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;

        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
