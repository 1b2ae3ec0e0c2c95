// errors.rs
use thiserror::Error;

/// Errors originating from the simplify pipeline or the local store.
///
/// Per-record problems (bad dates, missing fields) never show up here; only
/// whole-batch or whole-file failures do.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Input format error: {0}")]
    InputFormat(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl PipelineError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        PipelineError::Io {
            path: path.into(),
            source,
        }
    }
}
