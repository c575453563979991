use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::{ModelError, Result};
use crate::genre::Genre;
use crate::ids::MovieId;

/// Rating applied when a create payload leaves `rate` out.
pub const DEFAULT_RATE: i64 = 5;

/// A stored movie record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u64,
    /// Kept as the JSON number the client sent, so `9` stays `9`.
    pub rate: Number,
    pub poster: String,
    pub genre: Vec<Genre>,
}

/// A fully validated create payload. Carries everything but the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u64,
    #[serde(default = "default_rate")]
    pub rate: Number,
    pub poster: String,
    pub genre: Vec<Genre>,
}

/// A validated partial update; `None` leaves the stored field alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoviePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<Genre>>,
}

pub fn default_rate() -> Number {
    Number::from(DEFAULT_RATE)
}

impl Movie {
    pub fn from_new(id: MovieId, new: NewMovie) -> Self {
        let NewMovie {
            title,
            year,
            director,
            duration,
            rate,
            poster,
            genre,
        } = new;

        Movie {
            id,
            title,
            year,
            director,
            duration,
            rate,
            poster,
            genre,
        }
    }

    /// Overwrites every field the patch carries. The id is not patchable.
    pub fn apply(&mut self, patch: MoviePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(director) = patch.director {
            self.director = director;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(rate) = patch.rate {
            self.rate = rate;
        }
        if let Some(poster) = patch.poster {
            self.poster = poster;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
    }

    pub fn has_genre(&self, query: &str) -> bool {
        self.genre.iter().any(|genre| genre.matches_ignore_case(query))
    }

    /// Parses a JSON array of records, rejecting repeated ids.
    pub fn list_from_json(raw: &str) -> Result<Vec<Movie>> {
        let movies: Vec<Movie> = serde_json::from_str(raw)?;

        let mut seen = std::collections::HashSet::with_capacity(movies.len());
        for movie in &movies {
            if !seen.insert(&movie.id) {
                return Err(ModelError::DuplicateId(movie.id.clone()));
            }
        }

        Ok(movies)
    }
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        self == &MoviePatch::default()
    }
}
