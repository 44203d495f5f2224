use crate::error::ApiError;
use crate::extract::PageTitle;
use crate::routes;
use crate::state::AppState;
use crate::store::StoreError;
use crate::views::View;
use axum::extract::State;

/// GET /view/{title} handler - Render a page, or the error view if it is missing
#[utoipa::path(
    get,
    path = routes::VIEW,
    params(
        ("title" = String, Path, description = "Page title, [a-zA-Z0-9_-]+")
    ),
    responses(
        (status = 200, description = "Page found", content_type = "text/html", body = String),
        (status = 404, description = "Page missing or title not allowed", content_type = "text/html", body = String),
        (status = 500, description = "Read failure", content_type = "text/plain", body = String)
    ),
    tag = "wiki"
)]
pub async fn view_handler(
    State(state): State<AppState>,
    title: PageTitle,
) -> Result<View, ApiError> {
    match state.store.load(title.as_str()).await {
        Ok(page) => {
            tracing::info!("Viewing page: {}", page.title);
            Ok(View::page(&page))
        }
        Err(StoreError::NotFound(_)) => {
            tracing::warn!("Page not found: {}", title.as_str());
            Ok(View::error(title.as_str()))
        }
        Err(err) => Err(err.into()),
    }
}
