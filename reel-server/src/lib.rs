//! # Reel Server
//!
//! A small REST service over an in-memory movie catalogue.
//!
//! ## Overview
//!
//! - **Catalogue**: list (optionally by genre), fetch, create, patch and
//!   delete movie records held in process memory
//! - **Validation**: every write is checked against the movie schema from
//!   `reel-model` before the store is touched
//! - **Origin allow-list**: cross-origin requests from unknown sites are
//!   rejected before routing
//!
//! The catalogue is seeded at startup and is gone when the process exits.

pub mod handlers;
pub mod infra;
pub mod middleware;
pub mod routes;

pub use infra::{
    app_state::AppState,
    config::{Config, ServeArgs},
    errors::{AppError, AppResult},
    movie_store::MovieStore,
};
pub use routes::create_app;
