//! Error types for job-folder storage.

use thiserror::Error;

/// Errors that can occur during job-folder operations.
#[derive(Error, Debug)]
pub enum JobStoreError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Chunk file error.
    #[error("Chunk file error: {0}")]
    Chunk(#[from] mart_populate::PopulateError),

    /// Folder missing or holding no data yet.
    #[error("Data not found or not ready yet: {0}")]
    FolderNotFound(String),
}
