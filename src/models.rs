use serde::Deserialize;

/// A titled document persisted as a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub body: Vec<u8>,
}

impl Page {
    /// Blank draft used when editing a page that does not exist yet
    pub fn draft(title: &str) -> Self {
        Self {
            title: title.to_string(),
            body: Vec::new(),
        }
    }

    /// Body decoded for display, with invalid UTF-8 replaced
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Query parameters for the index page
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Substring filter on page titles
    pub q: Option<String>,
}

/// Form submitted by the edit page
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct SaveForm {
    #[serde(default)]
    pub body: String,
}
