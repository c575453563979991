pub mod app_state;
pub mod config;
pub mod errors;
pub mod movie_store;
pub mod startup;
