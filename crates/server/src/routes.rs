pub mod categories;
pub mod todos;

use axum::{
    middleware,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::metrics;
use crate::openapi::ApiDoc;
use crate::state::AppState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: todo and category routes plus health, metrics and docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let todo_routes = Router::new()
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route("/todos/:id", axum::routing::put(todos::update_todo).delete(todos::delete_todo))
        .route("/todos/category/:category", get(todos::todos_by_category));

    let category_routes = Router::new()
        .route("/categories", get(categories::list_categories).post(categories::create_category))
        .route(
            "/categories/:category",
            axum::routing::put(categories::rename_category).delete(categories::delete_category),
        );

    let ops = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics_handler))
        .route("/api-docs/openapi.json", get(openapi_json));

    ops.merge(todo_routes)
        .merge(category_routes)
        .with_state(state)
        .layer(middleware::from_fn(metrics::track))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
