pub mod index;
pub mod view;
pub mod edit;
pub mod save;
pub mod delete;
pub mod info;

pub use index::index_handler;
pub use view::view_handler;
pub use edit::edit_handler;
pub use save::save_handler;
pub use delete::delete_handler;
pub use info::info_handler;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// `302 Found` redirect to `location`
fn found(location: impl Into<String>) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.into())]).into_response()
}
