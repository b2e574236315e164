//! Request timing
//!
//! Stamps every response with `X-Response-Time: <ms>ms` and writes one
//! access log line per request.

use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

use crate::observability::Event;

pub const RESPONSE_TIME_HEADER: &str = "x-response-time";

pub async fn response_time(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let mut response = next.run(request).await;

    let elapsed_ms = started.elapsed().as_millis() as u64;
    if let Ok(value) = HeaderValue::from_str(&format!("{}ms", elapsed_ms)) {
        response.headers_mut().insert(RESPONSE_TIME_HEADER, value);
    }

    tracing::info!(
        event = %Event::RequestComplete,
        %method,
        %uri,
        status = response.status().as_u16(),
        elapsed_ms,
        "{} {} - {}ms",
        method,
        uri,
        elapsed_ms
    );

    response
}
