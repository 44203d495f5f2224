use crate::error::ApiError;
use crate::models::SearchQuery;
use crate::routes;
use crate::state::AppState;
use crate::views::View;
use axum::extract::{Query, State};

/// GET / handler - List pages, optionally filtered by a title substring
#[utoipa::path(
    get,
    path = routes::ROOT,
    params(
        ("q" = Option<String>, Query, description = "Substring filter on page titles")
    ),
    responses(
        (status = 200, description = "Index of matching pages", content_type = "text/html", body = String),
        (status = 500, description = "Pages directory unreadable", content_type = "text/plain", body = String)
    ),
    tag = "wiki"
)]
pub async fn index_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<View, ApiError> {
    let needle = query.q.unwrap_or_default();
    let titles = state.store.search(&needle).await?;

    tracing::info!("Listed {} pages (query: {:?})", titles.len(), needle);
    Ok(View::index(titles, &needle))
}
