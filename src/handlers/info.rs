use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use crate::views::{InfoView, View};
use axum::extract::State;
use tokio::fs;

/// Name of the machine serving the wiki
///
/// Tries `HOSTNAME`, then `/etc/hostname`, falling back to `unknown`.
async fn host_identifier() -> String {
    if let Ok(name) = std::env::var("HOSTNAME") {
        if !name.trim().is_empty() {
            return name.trim().to_string();
        }
    }

    match fs::read_to_string("/etc/hostname").await {
        Ok(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => "unknown".to_string(),
    }
}

/// GET /info handler - Host and store summary
#[utoipa::path(
    get,
    path = routes::INFO,
    responses(
        (status = 200, description = "Host information", content_type = "text/html", body = String),
        (status = 500, description = "Pages directory unreadable", content_type = "text/plain", body = String)
    ),
    tag = "wiki"
)]
pub async fn info_handler(State(state): State<AppState>) -> Result<View, ApiError> {
    let page_count = state.store.search("").await?.len();
    let hostname = host_identifier().await;

    tracing::debug!("Serving info for host {}", hostname);
    Ok(View::Info(InfoView {
        hostname,
        pages_path: state.store.root().display().to_string(),
        page_count,
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
