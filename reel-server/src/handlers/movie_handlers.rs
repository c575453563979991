use axum::{
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::Json,
};
use reel_model::{Movie, MovieId, validate_full, validate_partial};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

#[derive(Debug, Default, Deserialize)]
pub struct MovieListQuery {
    pub genre: Option<String>,
}

pub async fn list_movies_handler(
    State(state): State<AppState>,
    query: Result<Query<MovieListQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Movie>>> {
    let Query(query) = query?;
    // An empty `?genre=` means no filter.
    let genre = query.genre.as_deref().filter(|genre| !genre.is_empty());
    let movies = state.store().list(genre);
    debug!(?genre, count = movies.len(), "Listing movies");
    Ok(Json(movies))
}

pub async fn get_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Movie>> {
    state
        .store()
        .get(&MovieId::new(id))
        .map(Json)
        .ok_or_else(AppError::movie_not_found)
}

pub async fn create_movie_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let Json(payload) = payload?;
    let new_movie = validate_full(&payload).inspect_err(|violations| {
        debug!(%violations, "Rejected movie payload");
    })?;

    let movie = state.store().insert(new_movie);
    info!(id = %movie.id, title = %movie.title, "Created movie");

    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn delete_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let removed = state
        .store()
        .remove(&MovieId::new(id))
        .ok_or_else(AppError::movie_not_found)?;

    info!(id = %removed.id, title = %removed.title, "Deleted movie");
    Ok(Json(json!({ "message": "Movie deleted" })))
}

/// Validation runs before the lookup, so a bad body on an unknown id is
/// still a 400.
pub async fn update_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Movie>> {
    let Json(payload) = payload?;
    let patch = validate_partial(&payload).inspect_err(|violations| {
        debug!(%violations, "Rejected movie patch");
    })?;

    let movie = state
        .store()
        .update(&MovieId::new(id), patch)
        .ok_or_else(AppError::movie_not_found)?;

    info!(id = %movie.id, "Updated movie");
    Ok(Json(movie))
}
