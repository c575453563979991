use anyhow::{Context, Result};
use tracing::info;

use crate::infra::{config::Config, movie_store::MovieStore};

/// Builds the catalogue the server starts with: the configured seed file if
/// there is one, otherwise the bundled data set.
pub fn load_store(config: &Config) -> Result<MovieStore> {
    let store = match &config.seed_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read seed file {}", path.display()))?;
            MovieStore::from_json(&raw)
                .with_context(|| format!("failed to load seed file {}", path.display()))?
        }
        None => MovieStore::bundled().context("bundled movie data set is invalid")?,
    };

    info!(movies = store.len(), "Movie catalogue seeded");
    Ok(store)
}
