use thiserror::Error;

#[derive(Error, Debug)]
pub enum SibylError {
    #[error("Vector store unavailable: {0}")]
    VectorStoreUnavailable(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, SibylError>;
