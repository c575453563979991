use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        movie_handlers::{
            create_movie_handler, delete_movie_handler, get_movie_handler,
            list_movies_handler, update_movie_handler,
        },
        not_found_handler, root_handler,
    },
    infra::app_state::AppState,
    middleware::{cors_layer, enforce_allowed_origin},
};

/// Builds the full application router.
///
/// Layers run outer to inner: tracing, the origin allow-list, then CORS
/// headers. Rejected origins never reach a handler.
pub fn create_app(state: AppState) -> Router {
    let layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(from_fn_with_state(state.clone(), enforce_allowed_origin))
        .layer(cors_layer(&state.config().cors));

    Router::new()
        .route("/", get(root_handler))
        .merge(movie_routes())
        .fallback(not_found_handler)
        .layer(layers)
        .with_state(state)
}

fn movie_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/movies",
            get(list_movies_handler).post(create_movie_handler),
        )
        .route(
            "/movies/{id}",
            get(get_movie_handler)
                .delete(delete_movie_handler)
                .patch(update_movie_handler),
        )
}
