//! Origin allow-list.
//!
//! [`enforce_allowed_origin`] turns away cross-origin requests from sites
//! outside the configured list before any handler runs, preflights included.
//! Requests carrying no `Origin` header at all (same-origin navigation,
//! curl, server-to-server) are always let through. [`cors_layer`] then adds
//! the CORS response headers for the origins that passed.

use axum::{
    extract::{Request, State},
    http::{Method, header},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::warn;

use crate::infra::{app_state::AppState, config::CorsConfig, errors::AppError};

pub async fn enforce_allowed_origin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(origin) = req.headers().get(header::ORIGIN)
        && !state.config().cors.is_allowed(origin)
    {
        let origin = String::from_utf8_lossy(origin.as_bytes()).into_owned();
        warn!(%origin, method = %req.method(), path = %req.uri().path(), "Rejected request from origin outside allow-list");
        return Err(AppError::OriginRejected(origin));
    }

    Ok(next.run(req).await)
}

pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.allowed_origins.iter().cloned()))
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ]))
        .allow_headers(AllowHeaders::mirror_request())
}
