// Route path constants - single source of truth for all wiki paths

use axum::{
    http::{StatusCode, Uri},
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::api_doc;
use crate::handlers;
use crate::state::AppState;

pub const ROOT: &str = "/";
pub const INFO: &str = "/info";
pub const VIEW: &str = "/view/{title}";
pub const EDIT: &str = "/edit/{title}";
pub const SAVE: &str = "/save/{title}";
pub const DELETE: &str = "/delete/{title}";
pub const JS: &str = "/js";
pub const CSS: &str = "/css";
pub const OPENAPI: &str = "/api-docs/openapi.json";

/// Build the wiki router over `state`.
///
/// Anything outside the fixed route table falls through to a plain 404.
pub fn router(state: AppState) -> Router {
    let static_root = state.config.static_path.clone();

    Router::new()
        .route(ROOT, get(handlers::index_handler))
        .route(INFO, get(handlers::info_handler))
        .route(VIEW, get(handlers::view_handler))
        .route(EDIT, get(handlers::edit_handler))
        .route(SAVE, post(handlers::save_handler))
        .route(
            DELETE,
            get(handlers::delete_handler).post(handlers::delete_handler),
        )
        .route(OPENAPI, get(api_doc::openapi_handler))
        .nest_service(JS, ServeDir::new(static_root.join("js")))
        .nest_service(CSS, ServeDir::new(static_root.join("css")))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, &'static str) {
    tracing::debug!("No route for {}", uri.path());
    (StatusCode::NOT_FOUND, "404 page not found")
}
