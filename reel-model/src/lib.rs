//! Core data model definitions for the Reel movie catalogue.
//!
//! The crate owns the shape of a movie record, the closed genre set and the
//! declarative constraint table every client payload is checked against
//! before it may reach the store.
#![allow(missing_docs)]

pub mod error;
pub mod genre;
pub mod ids;
pub mod movie;
pub mod validation;

pub use error::{ModelError, Result as ModelResult};
pub use genre::Genre;
pub use ids::MovieId;
pub use movie::{Movie, MoviePatch, NewMovie};
pub use validation::{
    Violation, Violations, validate_full, validate_partial,
};
