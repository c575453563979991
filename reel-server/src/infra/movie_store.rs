use parking_lot::RwLock;
use reel_model::{Movie, MovieId, MoviePatch, ModelResult, NewMovie};

/// Data set the catalogue starts from when no seed file is configured.
pub const BUNDLED_MOVIES: &str = include_str!("../../data/movies.json");

/// The process-wide movie collection.
///
/// Owned by [`AppState`](crate::infra::app_state::AppState) rather than
/// living in a global. Every operation takes the lock once, so a mutation is
/// a single step from the point of view of concurrent requests. Insertion
/// order is preserved.
#[derive(Debug, Default)]
pub struct MovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl MovieStore {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }

    pub fn from_json(raw: &str) -> ModelResult<Self> {
        Movie::list_from_json(raw).map(Self::new)
    }

    pub fn bundled() -> ModelResult<Self> {
        Self::from_json(BUNDLED_MOVIES)
    }

    pub fn len(&self) -> usize {
        self.movies.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.read().is_empty()
    }

    /// Snapshot of the collection, optionally narrowed to movies tagged with
    /// `genre` (case-insensitive).
    pub fn list(&self, genre: Option<&str>) -> Vec<Movie> {
        let movies = self.movies.read();
        match genre {
            Some(genre) => movies
                .iter()
                .filter(|movie| movie.has_genre(genre))
                .cloned()
                .collect(),
            None => movies.clone(),
        }
    }

    pub fn get(&self, id: &MovieId) -> Option<Movie> {
        self.movies
            .read()
            .iter()
            .find(|movie| &movie.id == id)
            .cloned()
    }

    /// Appends a new record under a freshly generated id.
    pub fn insert(&self, new_movie: NewMovie) -> Movie {
        let mut movies = self.movies.write();

        let mut id = MovieId::generate();
        while movies.iter().any(|movie| movie.id == id) {
            id = MovieId::generate();
        }

        let movie = Movie::from_new(id, new_movie);
        movies.push(movie.clone());
        movie
    }

    pub fn remove(&self, id: &MovieId) -> Option<Movie> {
        let mut movies = self.movies.write();
        let index = movies.iter().position(|movie| &movie.id == id)?;
        Some(movies.remove(index))
    }

    /// Merges `patch` into the matching record and returns the result.
    pub fn update(&self, id: &MovieId, patch: MoviePatch) -> Option<Movie> {
        let mut movies = self.movies.write();
        let movie = movies.iter_mut().find(|movie| &movie.id == id)?;
        movie.apply(patch);
        Some(movie.clone())
    }
}
