use std::{fmt, sync::Arc};

use crate::infra::{config::Config, movie_store::MovieStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MovieStore>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("movies", &self.store.len())
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(store: MovieStore, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }

    pub fn store(&self) -> &MovieStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
