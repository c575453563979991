pub mod movie_handlers;

use axum::response::Json;
use serde_json::{Value, json};
use tracing::debug;

use crate::infra::errors::AppError;

pub async fn root_handler() -> Json<Value> {
    debug!("Root endpoint called");
    Json(json!({ "message": "Hola Mundo" }))
}

pub async fn not_found_handler() -> AppError {
    AppError::not_found("Not found")
}
