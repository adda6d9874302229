//! Request counting middleware

use std::{sync::Arc, time::Instant};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::handlers::metrics::MetricsCollector;

/// Record every request in the metrics collector
pub async fn track_requests(
    State(metrics): State<Arc<MetricsCollector>>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    metrics.request_start();

    let response = next.run(request).await;

    metrics.request_end(
        start.elapsed().as_micros() as u64,
        response.status().as_u16(),
    );
    response
}
