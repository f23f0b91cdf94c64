use std::time::Instant;

use axum::{middleware::Next, response::Response};

/// Log one line per request with status and latency.
pub async fn log_requests(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let res = next.run(req).await;

    tracing::info!(
        %method,
        path = %path,
        status = res.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    res
}
