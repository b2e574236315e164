//! # taskdesk HTTP Server Module
//!
//! Serves one schema's resources over HTTP/JSON with axum.
//!
//! # Endpoints
//!
//! - `/`, `/api/` - liveness text
//! - `/api/{collection}/*` - resource operations (see [`resource_routes`])
//!
//! Every response carries `X-Response-Time`.

pub mod body;
pub mod config;
pub mod failure;
pub mod liveness_routes;
pub mod middleware;
pub mod resource_routes;
pub mod server;

pub use config::{ConfigError, HttpServerConfig};
pub use failure::GatedFailure;
pub use server::{app, HttpServer};
