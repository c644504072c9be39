//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations.
///
/// Every variant means the same thing to a page: the project data it needs
/// is unavailable. Pages react by redirecting to the home page's project
/// listing rather than rendering a partial view.
#[derive(Error, Debug)]
pub enum FolioError {
    /// The catalog could not be fetched (network failure, non-2xx status)
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The catalog document is not valid JSON or does not match the schema
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// General I/O error (file-backed sources)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The detail page was opened without an `id` query parameter
    #[error("No project id was given")]
    MissingProjectId,

    /// No project in the catalog carries the requested id
    #[error("Project not found: {0}")]
    ProjectNotFound(String),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;
