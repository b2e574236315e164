//! Liveness HTTP Routes
//!
//! Plain-text readiness answers at `/` and `/api/`.

use axum::{routing::get, Router};

pub const ROOT_READY: &str = "Ready to receive requests";
pub const API_READY: &str = "API ready to receive requests";

/// Create liveness routes
pub fn liveness_routes() -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/api", get(api_handler))
        .route("/api/", get(api_handler))
}

async fn root_handler() -> &'static str {
    ROOT_READY
}

async fn api_handler() -> &'static str {
    API_READY
}
