use std::time::Instant;

use axum::{extract::{Request, State}, http::StatusCode, middleware::Next, response::Response};
use once_cell::sync::Lazy;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, register_int_gauge, Encoder, Histogram,
    IntCounter, IntCounterVec, IntGauge, TextEncoder,
};

use crate::state::AppState;

// Prometheus metrics (default registry)
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "todo_store_http_requests_total",
        "Total HTTP requests by method and status",
        &["method", "status"]
    )
    .expect("register http_requests_total")
});

pub static REQUEST_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "todo_store_request_duration_seconds",
        "Request duration in seconds",
        vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    )
    .expect("register request_duration")
});

pub static TODOS: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!("todo_store_todos", "Todos currently stored").expect("register todos gauge")
});

pub static CATEGORIES: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!("todo_store_categories", "Categories currently stored")
        .expect("register categories gauge")
});

pub static CASCADE_REMOVED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "todo_store_cascade_removed_total",
        "Todos removed by category deletion"
    )
    .expect("register cascade_removed_total")
});

/// Middleware: count requests and observe latency.
pub async fn track(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let started = Instant::now();
    let resp = next.run(req).await;
    REQUEST_DURATION.observe(started.elapsed().as_secs_f64());
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method.as_str(), resp.status().as_str()])
        .inc();
    resp
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}"));
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

/// `GET /metrics`: refresh the store gauges, then render the default registry.
pub async fn metrics_handler(State(state): State<AppState>) -> (StatusCode, String) {
    let stats = state.store.stats().await;
    TODOS.set(stats.todos as i64);
    CATEGORIES.set(stats.categories as i64);
    // force registration so the counter shows up before the first cascade
    Lazy::force(&CASCADE_REMOVED_TOTAL);
    encode_metrics()
}
