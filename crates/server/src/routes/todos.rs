use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use common::types::Message;
use service::todos::{NewTodo, Todo, TodoPatch};
use tracing::info;

use crate::errors::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

#[utoipa::path(get, path = "/todos", tag = "todos", responses((status = 200, description = "All todos", body = [crate::openapi::TodoDoc])))]
pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    let list = state.store.list_todos().await;
    info!(count = list.len(), "list todos");
    Json(list)
}

#[utoipa::path(
    post, path = "/todos", tag = "todos",
    request_body = crate::openapi::NewTodoDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::TodoDoc),
        (status = 400, description = "Title and category are required", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_todo(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<NewTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = state.store.create_todo(input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

#[utoipa::path(
    put, path = "/todos/{id}", tag = "todos",
    params(("id" = String, Path, description = "Todo id")),
    request_body = crate::openapi::TodoPatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::TodoDoc),
        (status = 404, description = "TODO not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<TodoPatch>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.store.update_todo(&id, patch).await?;
    Ok(Json(todo))
}

#[utoipa::path(
    delete, path = "/todos/{id}", tag = "todos",
    params(("id" = String, Path, description = "Todo id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "TODO not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    state.store.delete_todo(&id).await?;
    Ok(Json(Message::new("TODO deleted")))
}

#[utoipa::path(
    get, path = "/todos/category/{category}", tag = "todos",
    params(("category" = String, Path, description = "Exact category name")),
    responses((status = 200, description = "Todos in the category, possibly empty", body = [crate::openapi::TodoDoc]))
)]
pub async fn todos_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<Vec<Todo>> {
    Json(state.store.todos_by_category(&category).await)
}
