//! Declarative constraint table for movie payloads.

use serde_json::Value;

use crate::genre::Genre;
use crate::movie;

/// Numeric limit on an integer or number field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Inclusive(f64),
    Exclusive(f64),
}

/// What a present value must look like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Integer {
        min: Option<Bound>,
        max: Option<Bound>,
    },
    Number {
        min: Option<Bound>,
        max: Option<Bound>,
    },
    /// A string that parses as an absolute URL.
    Url,
    /// An array whose every element is one of the listed names.
    EnumList(&'static [&'static str]),
}

/// What happens when the field is missing from a full payload.
#[derive(Debug, Clone, Copy)]
pub enum Presence {
    Required,
    Default(fn() -> Value),
}

/// Messages that replace the generic wording for a single field.
#[derive(Debug, Clone, Copy, Default)]
pub struct Messages {
    pub required: Option<&'static str>,
    pub invalid_type: Option<&'static str>,
    pub invalid: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub presence: Presence,
    pub messages: Messages,
}

impl FieldRule {
    const fn required(name: &'static str, kind: FieldKind) -> Self {
        FieldRule {
            name,
            kind,
            presence: Presence::Required,
            messages: Messages {
                required: None,
                invalid_type: None,
                invalid: None,
            },
        }
    }

    const fn with_default(mut self, default: fn() -> Value) -> Self {
        self.presence = Presence::Default(default);
        self
    }

    const fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}

fn default_rate() -> Value {
    Value::Number(movie::default_rate())
}

pub const MOVIE_SCHEMA: &[FieldRule] = &[
    FieldRule::required("title", FieldKind::Text).with_messages(Messages {
        required: Some("Movie title is required"),
        invalid_type: Some("Movie title must be a string"),
        invalid: None,
    }),
    FieldRule::required(
        "year",
        FieldKind::Integer {
            min: Some(Bound::Inclusive(1900.0)),
            max: Some(Bound::Inclusive(2024.0)),
        },
    ),
    FieldRule::required("director", FieldKind::Text),
    FieldRule::required(
        "duration",
        FieldKind::Integer {
            min: Some(Bound::Exclusive(0.0)),
            max: None,
        },
    ),
    FieldRule::required(
        "rate",
        FieldKind::Number {
            min: Some(Bound::Inclusive(0.0)),
            max: Some(Bound::Inclusive(10.0)),
        },
    )
    .with_default(default_rate),
    FieldRule::required("poster", FieldKind::Url).with_messages(Messages {
        required: None,
        invalid_type: None,
        invalid: Some("Poster must be a valid URL"),
    }),
    FieldRule::required("genre", FieldKind::EnumList(&Genre::NAMES)),
];
