//! Request Logging
//!
//! Emits one line per request in the shape
//! `POST /api/persons 200 61 - 1.234 ms {"name":"Arto Hellas",...}` —
//! method, path, status, response size, latency and the request body, so
//! payload problems stay observable without a debugger. Request and response
//! bodies are buffered once each; a body beyond the buffer limit is logged
//! and forwarded as empty.

use std::time::Instant;

use axum::body::{Body, Bytes, to_bytes};
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Upper bound when buffering a body for the log line.
const BODY_LIMIT: usize = 1024 * 1024;

pub async fn log_request(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let (parts, body) = request.into_parts();
    let request_body = to_bytes(body, BODY_LIMIT).await.unwrap_or_else(|_| Bytes::new());
    let request = Request::from_parts(parts, Body::from(request_body.clone()));

    let response = next.run(request).await;
    let status = response.status().as_u16();

    let (parts, body) = response.into_parts();
    let response_body = to_bytes(body, BODY_LIMIT).await.unwrap_or_else(|_| Bytes::new());
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    tracing::info!(
        "{} {} {} {} - {:.3} ms {}",
        method,
        path,
        status,
        response_body.len(),
        elapsed_ms,
        String::from_utf8_lossy(&request_body)
    );

    Response::from_parts(parts, Body::from(response_body))
}
