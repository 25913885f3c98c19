//! Prometheus metrics for request tracking and collection activity.
//!
//! Metrics are recorded through the `metrics` facade. Until
//! [`install_exporter`] has been called the macros are no-ops, which keeps
//! tests and embedded routers free of global state.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{debug, info};

use crate::error::AppError;

// === Metric Name Constants ===

/// HTTP request counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// Users created counter metric name.
pub const METRIC_USERS_CREATED: &str = "users_created_total";
/// Users updated counter metric name.
pub const METRIC_USERS_UPDATED: &str = "users_updated_total";
/// Users deleted counter metric name.
pub const METRIC_USERS_DELETED: &str = "users_deleted_total";
/// Lookups that matched no user.
pub const METRIC_USER_LOOKUPS_MISSED: &str = "user_lookups_missed_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests served");
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(METRIC_USERS_CREATED, "Total number of users created");
    describe_counter!(METRIC_USERS_UPDATED, "Total number of users updated");
    describe_counter!(METRIC_USERS_DELETED, "Total number of delete requests that removed users");
    describe_counter!(
        METRIC_USER_LOOKUPS_MISSED,
        "Total number of get/update/delete requests for an unknown id"
    );

    debug!("Metrics initialized");
}

/// Install the Prometheus recorder with an HTTP scrape listener on `addr`.
pub fn install_exporter(addr: SocketAddr) -> Result<(), AppError> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| AppError::Metrics(e.to_string()))?;

    init_metrics();
    info!("Prometheus exporter listening on {}", addr);
    Ok(())
}

/// Record one served HTTP request.
pub fn record_http_request(start: Instant, method: &str, path: &str, status: u16) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    counter!(
        METRIC_HTTP_REQUESTS,
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(latency_ms);
}

/// Increment users created counter.
pub fn inc_users_created() {
    counter!(METRIC_USERS_CREATED).increment(1);
}

/// Increment users updated counter.
pub fn inc_users_updated() {
    counter!(METRIC_USERS_UPDATED).increment(1);
}

/// Increment users deleted counter.
pub fn inc_users_deleted() {
    counter!(METRIC_USERS_DELETED).increment(1);
}

/// Increment missed lookups counter.
pub fn inc_user_lookups_missed() {
    counter!(METRIC_USER_LOOKUPS_MISSED).increment(1);
}

/// Route template a request was matched against, or `unmatched`.
pub fn route_label(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string())
}

/// Middleware recording request count and latency per route template.
///
/// Uses the matched route (`/users/:id`) rather than the raw URI so ids do
/// not become label values.
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = route_label(&req);

    let response = next.run(req).await;

    record_http_request(start, &method, &path, response.status().as_u16());
    response
}
