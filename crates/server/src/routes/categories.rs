use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use common::types::Message;
use service::todos::{CategoryRename, NewCategory};

use crate::errors::ApiError;
use crate::extract::JsonBody;
use crate::metrics;
use crate::state::AppState;

#[utoipa::path(get, path = "/categories", tag = "categories", responses((status = 200, description = "Category names", body = [String])))]
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.store.list_categories().await)
}

#[utoipa::path(
    post, path = "/categories", tag = "categories",
    request_body = crate::openapi::NewCategoryDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CategoryCreatedDoc),
        (status = 400, description = "Missing name or already exists", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<NewCategory>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let category = state.store.create_category(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({"message": "Category created", "name": category.name})),
    ))
}

#[utoipa::path(
    put, path = "/categories/{category}", tag = "categories",
    params(("category" = String, Path, description = "Current category name")),
    request_body = crate::openapi::CategoryRenameDoc,
    responses(
        (status = 200, description = "Renamed; todos follow the new name. Renaming to the current name is a no-op", body = crate::openapi::CategoryRenamedDoc),
        (status = 400, description = "New category name is required", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Category not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn rename_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    JsonBody(input): JsonBody<CategoryRename>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let renamed = state.store.rename_category(&category, input).await?;
    Ok(Json(serde_json::json!({"message": "Category updated", "newName": renamed.name})))
}

#[utoipa::path(
    delete, path = "/categories/{category}", tag = "categories",
    params(("category" = String, Path, description = "Category name")),
    responses(
        (status = 200, description = "Category and its todos deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Category not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Message>, ApiError> {
    let removed = state.store.delete_category(&category).await?;
    metrics::CASCADE_REMOVED_TOTAL.inc_by(removed as u64);
    Ok(Json(Message::new("Category and associated todos deleted")))
}
