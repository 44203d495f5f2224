use askama::Template;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::models::Page;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexView {
    pub titles: Vec<String>,
    pub query: String,
}

#[derive(Template)]
#[template(path = "view.html")]
pub struct PageView {
    pub title: String,
    pub body: String,
}

#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditView {
    pub title: String,
    pub body: String,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorView {
    pub title: String,
}

#[derive(Template)]
#[template(path = "info.html")]
pub struct InfoView {
    pub hostname: String,
    pub pages_path: String,
    pub page_count: usize,
    pub version: String,
}

/// Every page the wiki can render, one variant per template
pub enum View {
    Index(IndexView),
    Page(PageView),
    Edit(EditView),
    Error(ErrorView),
    Info(InfoView),
}

impl View {
    pub fn index(titles: Vec<String>, query: &str) -> Self {
        View::Index(IndexView {
            titles,
            query: query.to_string(),
        })
    }

    pub fn page(page: &Page) -> Self {
        View::Page(PageView {
            title: page.title.clone(),
            body: page.body_text(),
        })
    }

    pub fn edit(page: &Page) -> Self {
        View::Edit(EditView {
            title: page.title.clone(),
            body: page.body_text(),
        })
    }

    pub fn error(title: &str) -> Self {
        View::Error(ErrorView {
            title: title.to_string(),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            View::Index(_) => "index",
            View::Page(_) => "view",
            View::Edit(_) => "edit",
            View::Error(_) => "error",
            View::Info(_) => "info",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            View::Error(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::OK,
        }
    }

    pub fn render(&self) -> askama::Result<String> {
        match self {
            View::Index(v) => v.render(),
            View::Page(v) => v.render(),
            View::Edit(v) => v.render(),
            View::Error(v) => v.render(),
            View::Info(v) => v.render(),
        }
    }
}

/// HTML response for a rendered template; a render failure becomes a 500
/// carrying the error text.
fn html_response(status: StatusCode, name: &str, rendered: askama::Result<String>) -> Response {
    match rendered {
        Ok(html) => (
            status,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            html,
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Failed to render {} template", name);
            ApiError::from(err).into_response()
        }
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        html_response(self.status(), self.name(), self.render())
    }
}
