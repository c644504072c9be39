//! Catalog sources.
//!
//! A page loads the catalog exactly once. Where the JSON text comes from is
//! abstracted behind [`CatalogSource`]: the web app fetches it over HTTP,
//! the CLI reads it from disk, tests hand it over from memory.

use std::future::Future;

use crate::error::FolioResult;
use crate::types::{Catalog, Project};

/// Something that can produce the raw text of `projects.json`.
pub trait CatalogSource {
    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;

    /// Fetch the raw document. No retries; one call per page view.
    fn fetch(&self) -> impl Future<Output = FolioResult<String>>;
}

/// Fetch and parse a catalog.
pub async fn load_catalog<S: CatalogSource>(source: &S) -> FolioResult<Catalog> {
    let origin = source.describe();
    let text = match source.fetch().await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(source = %origin, error = %e, "Catalog fetch failed");
            return Err(e);
        }
    };

    match Catalog::from_json(&text) {
        Ok(catalog) => {
            tracing::info!(source = %origin, projects = catalog.len(), "Loaded catalog");
            Ok(catalog)
        }
        Err(e) => {
            tracing::warn!(source = %origin, error = %e, "Catalog parse failed");
            Err(e)
        }
    }
}

/// Load the catalog and resolve the detail page's `id` parameter.
pub async fn load_project<S: CatalogSource>(source: &S, id: Option<&str>) -> FolioResult<Project> {
    let catalog = load_catalog(source).await?;
    catalog.resolve(id).cloned()
}

/// In-memory source.
#[derive(Debug, Clone)]
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl CatalogSource for StaticSource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    async fn fetch(&self) -> FolioResult<String> {
        Ok(self.text.clone())
    }
}

/// Reads `projects.json` from the local filesystem.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileSource {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSource {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> FolioResult<String> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;

    const DOC: &str = r#"{ "projects": [
        { "id": "a", "title": "A", "category": "music", "highlight": true }
    ] }"#;

    #[tokio::test]
    async fn test_load_from_memory() {
        let catalog = load_catalog(&StaticSource::new(DOC)).await.unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[tokio::test]
    async fn test_load_rejects_garbage() {
        let result = load_catalog(&StaticSource::new("<html>404</html>")).await;
        assert!(matches!(result, Err(FolioError::Parse(_))));
    }

    #[tokio::test]
    async fn test_load_project() {
        let source = StaticSource::new(DOC);
        assert_eq!(load_project(&source, Some("a")).await.unwrap().title, "A");
        assert!(matches!(
            load_project(&source, Some("b")).await,
            Err(FolioError::ProjectNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_file_source() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("projects.json");
        std::fs::write(&path, DOC).unwrap();

        let catalog = load_catalog(&FileSource::new(&path)).await.unwrap();
        assert_eq!(catalog.find("a").unwrap().category, "music");
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let result = load_catalog(&FileSource::new("/definitely/not/here.json")).await;
        assert!(matches!(result, Err(FolioError::Io(_))));
    }
}
