use crate::ids::MovieId;

/// Errors produced while loading or assembling movie records.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid movie data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate movie id {0} in data set")]
    DuplicateId(MovieId),
}

pub type Result<T> = std::result::Result<T, ModelError>;
