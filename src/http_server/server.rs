//! # HTTP Server
//!
//! Builds the router for the configured schema and serves it.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::config::HttpServerConfig;
use super::liveness_routes::liveness_routes;
use super::middleware::response_time;
use super::resource_routes::{resource_routes, ResourceState};
use crate::engine::ResourceEngine;
use crate::negotiation::FailureGate;
use crate::observability::Event;
use crate::schema::{Classroom, Forestry, Schema, SchemaKind};
use crate::store::{snapshot, EntityStore, StoreResult};

/// HTTP server for one schema deployment
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server, seeding the store from the configured snapshot
    pub fn with_config(config: HttpServerConfig) -> StoreResult<Self> {
        let router = match config.schema {
            SchemaKind::Forestry => Self::build_router::<Forestry>(&config)?,
            SchemaKind::Classroom => Self::build_router::<Classroom>(&config)?,
        };
        Ok(Self { config, router })
    }

    fn build_router<S: Schema>(config: &HttpServerConfig) -> StoreResult<Router> {
        let store = match &config.snapshot {
            Some(path) => {
                let store = snapshot::load::<S>(path)?;
                let summary = store.summary();
                tracing::info!(
                    event = %Event::SnapshotLoaded,
                    schema = %S::KIND,
                    path = %path.display(),
                    collections = ?summary.collections,
                    "snapshot loaded"
                );
                store
            }
            None => EntityStore::new(),
        };

        Ok(app(
            ResourceEngine::new(store),
            config.failure_gate,
            &config.cors_origins,
        ))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until ctrl-c
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?;

        tracing::info!(
            event = %Event::ServerListening,
            %addr,
            schema = %self.config.schema,
            failure_gate = %self.config.failure_gate,
            "listening on http://{}",
            addr
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

/// Full application router for schema `S`
pub fn app<S: Schema>(
    engine: ResourceEngine<S>,
    gate: FailureGate,
    cors_origins: &[String],
) -> Router {
    let state = Arc::new(ResourceState::new(engine, gate));

    Router::new()
        .merge(liveness_routes())
        .merge(resource_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        // Outermost, so CORS preflight answers are timed too
        .layer(middleware::from_fn(response_time))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        // No origins configured: permissive
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; serve until the process is killed
        std::future::pending::<()>().await;
    }
    tracing::info!(event = %Event::ShutdownStart, "shutting down");
}
