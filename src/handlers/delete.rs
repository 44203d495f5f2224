use crate::error::ApiError;
use crate::extract::PageTitle;
use crate::handlers::found;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, response::Response};

/// POST /delete/{title} handler - Remove a page and redirect to the index
///
/// Also routed for GET.
#[utoipa::path(
    post,
    path = routes::DELETE,
    description = "Remove a page and redirect to the index. The same handler also answers GET /delete/{title}.",
    params(
        ("title" = String, Path, description = "Page title, [a-zA-Z0-9_-]+")
    ),
    responses(
        (status = 302, description = "Deleted, redirect to /"),
        (status = 404, description = "Page missing or title not allowed", content_type = "text/html", body = String),
        (status = 500, description = "Delete failure", content_type = "text/plain", body = String)
    ),
    tag = "wiki"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    title: PageTitle,
) -> Result<Response, ApiError> {
    if let Err(err) = state.store.delete(title.as_str()).await {
        tracing::warn!("Failed to delete page {}: {}", title.as_str(), err);
        return Err(err.into());
    }

    tracing::info!("Deleted page: {}", title.as_str());
    Ok(found(routes::ROOT))
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{body_string, send, send_form, setup_test_app};
    use axum::http::{header, StatusCode};

    #[tokio::test]
    async fn test_delete_then_view_shows_error() {
        let (app, store, _dir) = setup_test_app().await;
        send_form(&app, "/save/test1", "body=hello").await;

        let response = send(&app, "POST", "/delete/test1").await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/");
        assert!(!store.exists("test1").await.unwrap());

        let response = send(&app, "GET", "/view/test1").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("test1"));
    }

    #[tokio::test]
    async fn test_delete_via_get() {
        let (app, store, _dir) = setup_test_app().await;
        store.save("old", b"x").await.unwrap();

        let response = send(&app, "GET", "/delete/old").await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert!(!store.exists("old").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_page_renders_error_view() {
        let (app, _store, _dir) = setup_test_app().await;

        let response = send(&app, "POST", "/delete/nothing").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("nothing"));
    }
}
