use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One failed constraint: where it failed and what the caller should fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

/// Every constraint a payload failed, keyed by field path.
///
/// Paths follow the schema order. Array elements are addressed with a dotted
/// index (`genre.2`). Serialises as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        let mut violations = Self::new();
        violations.push(path, message);
        violations
    }

    /// Records a failure. A path keeps its first message.
    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        let path = path.into();
        if self.get(&path).is_none() {
            self.0.push(Violation {
                path,
                message: message.into(),
            });
        }
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|violation| violation.path == path)
            .map(|violation| violation.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub(crate) fn into_result<T>(self, value: T) -> Result<T, Violations> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl Serialize for Violations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for violation in &self.0 {
            map.serialize_entry(&violation.path, &violation.message)?;
        }
        map.end()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", violation.path, violation.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}
