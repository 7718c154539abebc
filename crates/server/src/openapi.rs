use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct TodoDoc {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
}

#[derive(ToSchema)]
pub struct NewTodoDoc { pub title: String, pub description: Option<String>, pub category: String }

#[derive(ToSchema)]
pub struct TodoPatchDoc { pub title: Option<String>, pub description: Option<String>, pub category: Option<String> }

#[derive(ToSchema)]
pub struct NewCategoryDoc { pub name: String }

#[derive(Serialize, ToSchema)]
pub struct CategoryRenameDoc {
    #[serde(rename = "newName")]
    pub new_name: String,
}

#[derive(ToSchema)]
pub struct CategoryCreatedDoc { pub message: String, pub name: String }

#[derive(Serialize, ToSchema)]
pub struct CategoryRenamedDoc {
    pub message: String,
    #[serde(rename = "newName")]
    pub new_name: String,
}

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::todos::list_todos,
        crate::routes::todos::create_todo,
        crate::routes::todos::update_todo,
        crate::routes::todos::delete_todo,
        crate::routes::todos::todos_by_category,
        crate::routes::categories::list_categories,
        crate::routes::categories::create_category,
        crate::routes::categories::rename_category,
        crate::routes::categories::delete_category,
    ),
    components(
        schemas(
            HealthResponse,
            TodoDoc,
            NewTodoDoc,
            TodoPatchDoc,
            NewCategoryDoc,
            CategoryRenameDoc,
            CategoryCreatedDoc,
            CategoryRenamedDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "todos"),
        (name = "categories")
    )
)]
pub struct ApiDoc;
