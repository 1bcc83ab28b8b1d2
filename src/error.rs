use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum DirdocError {
    #[error("Root is not a directory: {path}")]
    InvalidRoot { path: PathBuf },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot determine output location: {0}")]
    OutputLocation(String),
    #[error("Failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
impl DirdocError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DirdocError::Io {
            path: path.into(),
            source,
        }
    }
}
