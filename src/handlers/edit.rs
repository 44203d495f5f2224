use crate::error::ApiError;
use crate::extract::PageTitle;
use crate::models::Page;
use crate::routes;
use crate::state::AppState;
use crate::store::StoreError;
use crate::views::View;
use axum::extract::State;

/// GET /edit/{title} handler - Edit form, starting from a blank draft for new pages
#[utoipa::path(
    get,
    path = routes::EDIT,
    params(
        ("title" = String, Path, description = "Page title, [a-zA-Z0-9_-]+")
    ),
    responses(
        (status = 200, description = "Edit form", content_type = "text/html", body = String),
        (status = 404, description = "Title not allowed", content_type = "text/plain", body = String),
        (status = 500, description = "Read failure", content_type = "text/plain", body = String)
    ),
    tag = "wiki"
)]
pub async fn edit_handler(
    State(state): State<AppState>,
    title: PageTitle,
) -> Result<View, ApiError> {
    let page = match state.store.load(title.as_str()).await {
        Ok(page) => page,
        Err(StoreError::NotFound(_)) => {
            tracing::debug!("Editing new page: {}", title.as_str());
            Page::draft(title.as_str())
        }
        Err(err) => return Err(err.into()),
    };

    Ok(View::edit(&page))
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{body_string, send, setup_test_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_edit_existing_page_prefills_body() {
        let (app, store, _dir) = setup_test_app().await;
        store.save("abc", b"current text").await.unwrap();

        let response = send(&app, "GET", "/edit/abc").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("current text"));
        assert!(html.contains(r#"action="/save/abc""#));
    }

    #[tokio::test]
    async fn test_edit_missing_page_is_blank_draft() {
        let (app, store, _dir) = setup_test_app().await;

        let response = send(&app, "GET", "/edit/fresh").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("Editing fresh"));
        assert!(!store.exists("fresh").await.unwrap());
    }

    #[tokio::test]
    async fn test_edit_disallowed_title() {
        let (app, _store, _dir) = setup_test_app().await;

        let response = send(&app, "GET", "/edit/a%2Fb").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
