use axum::Json;
use utoipa::OpenApi;

use crate::handlers;
use crate::models::SaveForm;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-file-wiki",
        version = "0.1.0",
        description = "A minimal wiki storing one plain-text file per page"
    ),
    paths(
        handlers::index::index_handler,
        handlers::view::view_handler,
        handlers::edit::edit_handler,
        handlers::save::save_handler,
        handlers::delete::delete_handler,
        handlers::info::info_handler
    ),
    components(
        schemas(SaveForm)
    ),
    tags(
        (name = "wiki", description = "Page browsing and editing")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json handler
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
