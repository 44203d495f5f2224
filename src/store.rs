use anyhow::Context;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tokio::fs;

use crate::models::Page;

const PAGE_EXTENSION: &str = "txt";

/// Errors raised by the page store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid page title: {0:?}")]
    InvalidTitle(String),
    #[error("page not found: {0}")]
    NotFound(String),
    #[error("i/o error on page {title}: {source}")]
    Io {
        title: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to list pages directory {dir}: {source}")]
    Listing {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    fn from_io(title: &str, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound(title.to_string())
        } else {
            StoreError::Io {
                title: title.to_string(),
                source: err,
            }
        }
    }
}

/// Check a raw title against the allow-list `[a-zA-Z0-9_-]+`.
///
/// Separators, dots and anything else that could form a path segment are
/// rejected, so a valid title is always a single plain file stem.
pub fn validate_title(raw: &str) -> Result<&str, StoreError> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-';
    if raw.is_empty() || !raw.chars().all(allowed) {
        return Err(StoreError::InvalidTitle(raw.to_string()));
    }
    Ok(raw)
}

/// Resolve the file backing `title` inside `root` without touching disk.
///
/// The title is validated first, then the joined path must be a direct
/// child of `root` made only of normal components.
pub fn page_path(root: &Path, title: &str) -> Result<PathBuf, StoreError> {
    let title = validate_title(title)?;
    let path = root.join(format!("{title}.{PAGE_EXTENSION}"));

    let contained = path.parent() == Some(root)
        && path
            .strip_prefix(root)
            .map(|rel| rel.components().all(|c| matches!(c, Component::Normal(_))))
            .unwrap_or(false);
    if !contained {
        return Err(StoreError::InvalidTitle(title.to_string()));
    }
    Ok(path)
}

/// Title of a directory entry, if it names a page file
fn title_of(file_name: &str) -> Option<&str> {
    let stem = file_name.strip_suffix(&format!(".{PAGE_EXTENSION}"))?;
    validate_title(stem).ok()
}

/// File-per-page storage rooted at one directory
#[derive(Debug, Clone)]
pub struct PageStore {
    root: PathBuf,
}

impl PageStore {
    /// Open the store at `dir`, creating the directory if it does not exist.
    ///
    /// The root is canonicalized once here so that later containment checks
    /// compare against a fixed absolute path.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or resolved
    pub async fn open(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create pages directory {}", dir.display()))?;
        let root = fs::canonicalize(dir)
            .await
            .with_context(|| format!("Failed to resolve pages directory {}", dir.display()))?;

        tracing::info!("Page store opened at: {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a title to its file. A symlink entry must resolve inside the
    /// root; dangling links are rejected.
    async fn resolve(&self, title: &str) -> Result<PathBuf, StoreError> {
        let path = page_path(&self.root, title)?;
        let meta = match fs::symlink_metadata(&path).await {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(path),
            Err(e) => return Err(StoreError::from_io(title, e)),
        };
        if !meta.file_type().is_symlink() {
            return Ok(path);
        }

        match fs::canonicalize(&path).await {
            Ok(real) if real.starts_with(&self.root) => Ok(path),
            Ok(real) => {
                tracing::warn!(
                    "Path traversal attempt blocked: {} -> {}",
                    title,
                    real.display()
                );
                Err(StoreError::InvalidTitle(title.to_string()))
            }
            Err(e) => {
                tracing::warn!("Unresolvable page link blocked: {}: {}", title, e);
                Err(StoreError::InvalidTitle(title.to_string()))
            }
        }
    }

    /// Read the page stored under `title`
    ///
    /// # Errors
    /// `NotFound` if no file exists, `Io` for any other read failure
    pub async fn load(&self, title: &str) -> Result<Page, StoreError> {
        let path = self.resolve(title).await?;
        let body = fs::read(&path)
            .await
            .map_err(|e| StoreError::from_io(title, e))?;

        tracing::debug!("Loaded page {} ({} bytes)", title, body.len());
        Ok(Page {
            title: title.to_string(),
            body,
        })
    }

    /// Write `body` as the full content of `title`, creating or truncating
    /// the file. The previous content is replaced, never merged.
    pub async fn save(&self, title: &str, body: &[u8]) -> Result<(), StoreError> {
        let path = self.resolve(title).await?;
        fs::write(&path, body)
            .await
            .map_err(|e| StoreError::from_io(title, e))?;

        tracing::debug!("Saved page {} ({} bytes)", title, body.len());
        Ok(())
    }

    pub async fn delete(&self, title: &str) -> Result<(), StoreError> {
        let path = self.resolve(title).await?;
        fs::remove_file(&path)
            .await
            .map_err(|e| StoreError::from_io(title, e))?;

        tracing::debug!("Deleted page {}", title);
        Ok(())
    }

    pub async fn exists(&self, title: &str) -> Result<bool, StoreError> {
        let path = self.resolve(title).await?;
        fs::try_exists(&path)
            .await
            .map_err(|e| StoreError::from_io(title, e))
    }

    /// List page titles containing `needle`, sorted ascending.
    ///
    /// An empty needle matches every page. Entries that are not regular
    /// `.txt` files with a valid title stem are skipped.
    pub async fn search(&self, needle: &str) -> Result<Vec<String>, StoreError> {
        let listing = |e: io::Error| StoreError::Listing {
            dir: self.root.clone(),
            source: e,
        };
        let mut entries = fs::read_dir(&self.root).await.map_err(listing)?;

        let mut titles = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(listing)? {
            let file_type = entry.file_type().await.map_err(listing)?;
            if !file_type.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(title) = file_name.to_str().and_then(title_of) else {
                continue;
            };
            if title.contains(needle) {
                titles.push(title.to_string());
            }
        }

        titles.sort();
        Ok(titles)
    }
}
