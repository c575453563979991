//! Request middleware for the Reel server.

pub mod origin;

pub use origin::{cors_layer, enforce_allowed_origin};
