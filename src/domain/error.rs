use std::path::PathBuf;
use thiserror::Error;

/// ghkeys unified error type
///
/// Only conditions that end the run live here. A single user's failed fetch
/// is a [`FetchError`](crate::domain::result::FetchError) value instead.
#[derive(Error, Debug)]
pub enum GhKeysError {
    #[error("File {} already exists. Use --force to overwrite.", path.display())]
    FileExists { path: PathBuf },

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Could not determine home directory")]
    HomeDirUnavailable,
}

impl GhKeysError {
    /// Process exit code for a run that ended with this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type GhKeysResult<T> = Result<T, GhKeysError>;
