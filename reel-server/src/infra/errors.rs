use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use reel_model::{Violations, validation::BODY_PATH};
use serde_json::json;

pub const MOVIE_NOT_FOUND: &str = "Movie not found";
pub const ORIGIN_NOT_ALLOWED: &str = "Not allowed by CORS";
/// Violation path for a query string that does not deserialize.
pub const QUERY_PATH: &str = "query";

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body failed the movie schema.
    #[error("invalid payload: {0}")]
    Validation(#[from] Violations),

    #[error("{0}")]
    NotFound(String),

    /// The `Origin` header names a site outside the allow-list.
    #[error("origin `{0}` is not allowed")]
    OriginRejected(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn movie_not_found() -> Self {
        Self::not_found(MOVIE_NOT_FOUND)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::OriginRejected(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation(violations) => json!({ "error": violations }),
            AppError::NotFound(message) => json!({ "message": message }),
            AppError::OriginRejected(_) => json!({ "error": ORIGIN_NOT_ALLOWED }),
        };

        (status, Json(body)).into_response()
    }
}

// Unparseable or mistyped bodies are reported like any other schema failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(Violations::single(BODY_PATH, rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(Violations::single(QUERY_PATH, rejection.body_text()))
    }
}
