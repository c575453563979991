use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of genres a movie may be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Crime,
    Drama,
    Fantasy,
    Horror,
    Thriller,
    #[serde(rename = "Sci-Fi")]
    SciFi,
}

impl Genre {
    pub const ALL: [Genre; 9] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Comedy,
        Genre::Crime,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Thriller,
        Genre::SciFi,
    ];

    /// Wire names in declaration order, as accepted by validation.
    pub const NAMES: [&'static str; 9] = [
        "Action",
        "Adventure",
        "Comedy",
        "Crime",
        "Drama",
        "Fantasy",
        "Horror",
        "Thriller",
        "Sci-Fi",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Thriller => "Thriller",
            Genre::SciFi => "Sci-Fi",
        }
    }

    /// Exact, case-sensitive lookup of a wire name.
    pub fn from_name(name: &str) -> Option<Genre> {
        Genre::ALL.into_iter().find(|genre| genre.as_str() == name)
    }

    /// Used by the list filter, which ignores case.
    pub fn matches_ignore_case(&self, query: &str) -> bool {
        self.as_str().to_lowercase() == query.to_lowercase()
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_line_up_with_variants() {
        for (genre, name) in Genre::ALL.iter().zip(Genre::NAMES) {
            assert_eq!(genre.as_str(), name);
            assert_eq!(Genre::from_name(name), Some(*genre));
        }
    }

    #[test]
    fn from_name_is_case_sensitive() {
        assert_eq!(Genre::from_name("Drama"), Some(Genre::Drama));
        assert_eq!(Genre::from_name("drama"), None);
        assert_eq!(Genre::from_name("Musical"), None);
    }

    #[test]
    fn filter_match_ignores_case() {
        assert!(Genre::SciFi.matches_ignore_case("sci-fi"));
        assert!(Genre::Action.matches_ignore_case("ACTION"));
        assert!(!Genre::Action.matches_ignore_case("Adventure"));
    }

    #[test]
    fn sci_fi_uses_hyphenated_wire_name() {
        let json = serde_json::to_string(&Genre::SciFi).unwrap();
        assert_eq!(json, "\"Sci-Fi\"");
        let back: Genre = serde_json::from_str("\"Sci-Fi\"").unwrap();
        assert_eq!(back, Genre::SciFi);
    }
}
