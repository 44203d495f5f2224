use crate::error::ApiError;
use crate::extract::PageTitle;
use crate::handlers::found;
use crate::models::SaveForm;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, response::Response, Form};

/// POST /save/{title} handler - Store the submitted body and redirect to the page
#[utoipa::path(
    post,
    path = routes::SAVE,
    params(
        ("title" = String, Path, description = "Page title, [a-zA-Z0-9_-]+")
    ),
    request_body(content = SaveForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Saved, redirect to /view/{title}"),
        (status = 404, description = "Title not allowed", content_type = "text/plain", body = String),
        (status = 500, description = "Write failure", content_type = "text/plain", body = String)
    ),
    tag = "wiki"
)]
pub async fn save_handler(
    State(state): State<AppState>,
    title: PageTitle,
    Form(form): Form<SaveForm>,
) -> Result<Response, ApiError> {
    state
        .store
        .save(title.as_str(), form.body.as_bytes())
        .await?;

    tracing::info!("Saved page: {} ({} bytes)", title.as_str(), form.body.len());
    Ok(found(format!("/view/{}", title.as_str())))
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{body_string, send, send_form, setup_test_app};
    use axum::http::{header, StatusCode};

    #[tokio::test]
    async fn test_save_then_view() {
        let (app, store, _dir) = setup_test_app().await;

        let response = send_form(&app, "/save/test1", "body=hello").await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/view/test1");
        assert_eq!(store.load("test1").await.unwrap().body, b"hello");

        let html = body_string(send(&app, "GET", "/view/test1").await).await;
        assert!(html.contains("hello"));
    }

    #[tokio::test]
    async fn test_save_replaces_previous_body() {
        let (app, store, _dir) = setup_test_app().await;

        send_form(&app, "/save/note", "body=first+version+of+the+note").await;
        send_form(&app, "/save/note", "body=second").await;

        assert_eq!(store.load("note").await.unwrap().body, b"second");
    }

    #[tokio::test]
    async fn test_save_without_body_field_stores_empty_page() {
        let (app, store, _dir) = setup_test_app().await;

        let response = send_form(&app, "/save/empty", "").await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert!(store.load("empty").await.unwrap().body.is_empty());
    }

    #[tokio::test]
    async fn test_save_traversal_title_is_rejected() {
        let (app, store, dir) = setup_test_app().await;

        let response = send_form(&app, "/save/..%2F..%2Fetc%2Fpasswd", "body=pwned").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send_form(&app, "/save/..%2Fescaped", "body=pwned").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        assert!(!dir.path().join("escaped.txt").exists());
        assert!(store.search("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_requires_post() {
        let (app, _store, _dir) = setup_test_app().await;

        let response = send(&app, "GET", "/save/abc").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
