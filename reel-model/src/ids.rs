use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a movie record.
///
/// Held as the exact string the record carries, so lookups only match that
/// spelling. Fresh ids are hyphenated lowercase v4 UUIDs; ids loaded from a
/// data set are kept verbatim.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(raw: impl Into<String>) -> Self {
        MovieId(raw.into())
    }

    pub fn generate() -> Self {
        MovieId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for MovieId {
    fn from(raw: String) -> Self {
        MovieId(raw)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHAWSHANK: &str = "dcdd0fad-a94c-4810-8acc-5f108d3b18c3";

    #[test]
    fn generated_ids_are_hyphenated_v4_and_distinct() {
        let a = MovieId::generate();
        let b = MovieId::generate();
        assert_ne!(a, b);

        let parsed = Uuid::parse_str(a.as_str()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.hyphenated().to_string(), a.as_str());
    }

    #[test]
    fn equality_is_exact_on_the_string() {
        let id = MovieId::new(SHAWSHANK);

        assert_eq!(id, MovieId::new(SHAWSHANK));
        assert_ne!(id, MovieId::new(SHAWSHANK.to_uppercase()));
        assert_ne!(id, MovieId::new(SHAWSHANK.replace('-', "")));
        assert_ne!(id, MovieId::new(format!("urn:uuid:{SHAWSHANK}")));
    }

    #[test]
    fn non_uuid_ids_are_kept_verbatim() {
        let id: MovieId = serde_json::from_str("\"movie-42\"").unwrap();
        assert_eq!(id.as_str(), "movie-42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"movie-42\"");
    }
}
