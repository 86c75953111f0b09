// File: src/error.rs
use std::path::PathBuf;

/// Failures of the file-backed store and of config loading. The style
/// pipeline itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// `origin` names a file path or a store key.
    #[error("JSON error in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    /// The temp file could not be moved over the destination.
    #[error("could not persist {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

pub type Result<T> = std::result::Result<T, StyleError>;
