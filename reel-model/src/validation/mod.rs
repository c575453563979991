//! Payload validation for movie records.
//!
//! Every field is described once in [`MOVIE_SCHEMA`]; [`validate`] walks the
//! table and reports every failing field instead of stopping at the first.
//! Keys the table does not know (including `id`) are dropped from the
//! result, so a client can never smuggle them into a record.

pub mod schema;
mod violations;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub use schema::{Bound, FieldKind, FieldRule, MOVIE_SCHEMA, Presence};
pub use violations::{Violation, Violations};

use crate::movie::{MoviePatch, NewMovie};

/// Path used when the payload as a whole is unusable.
pub const BODY_PATH: &str = "body";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Missing fields are violations unless the rule has a default.
    Full,
    /// Missing fields are skipped; present ones still face every constraint.
    Partial,
}

/// Checks a create payload against the full schema.
pub fn validate_full(candidate: &Value) -> Result<NewMovie, Violations> {
    let fields = validate(MOVIE_SCHEMA, candidate, Mode::Full)?;
    into_typed(fields)
}

/// Checks an update payload. Only the fields it carries are validated.
pub fn validate_partial(candidate: &Value) -> Result<MoviePatch, Violations> {
    let fields = validate(MOVIE_SCHEMA, candidate, Mode::Partial)?;
    into_typed(fields)
}

/// Evaluates `schema` against `candidate`, returning the accepted fields in
/// normalised form (integers as integers, defaults filled in).
pub fn validate(
    schema: &[FieldRule],
    candidate: &Value,
    mode: Mode,
) -> Result<Map<String, Value>, Violations> {
    let Some(object) = candidate.as_object() else {
        return Err(Violations::single(
            BODY_PATH,
            format!("Expected object, received {}", type_name(candidate)),
        ));
    };

    let mut accepted = Map::new();
    let mut violations = Violations::new();

    for rule in schema {
        match object.get(rule.name) {
            Some(value) => {
                if let Some(normalised) = check_field(rule, value, &mut violations) {
                    accepted.insert(rule.name.to_string(), normalised);
                }
            }
            None => match (mode, rule.presence) {
                (Mode::Partial, _) => {}
                (Mode::Full, Presence::Default(default)) => {
                    accepted.insert(rule.name.to_string(), default());
                }
                (Mode::Full, Presence::Required) => {
                    violations.push(rule.name, rule.messages.required.unwrap_or("Required"));
                }
            },
        }
    }

    violations.into_result(accepted)
}

fn into_typed<T: DeserializeOwned>(fields: Map<String, Value>) -> Result<T, Violations> {
    serde_json::from_value(Value::Object(fields))
        .map_err(|err| Violations::single(BODY_PATH, err.to_string()))
}

fn check_field(rule: &FieldRule, value: &Value, violations: &mut Violations) -> Option<Value> {
    let path = rule.name;

    match rule.kind {
        FieldKind::Text => match value.as_str() {
            Some(text) => Some(Value::from(text)),
            None => {
                violations.push(path, type_message(rule, "string", value));
                None
            }
        },
        FieldKind::Integer { min, max } => {
            let Some(number) = value.as_f64() else {
                violations.push(path, type_message(rule, "number", value));
                return None;
            };
            if number.fract() != 0.0 {
                violations.push(path, "Expected integer, received float");
                return None;
            }
            if let Some(message) = range_message(number, min, max) {
                violations.push(path, rule.messages.invalid.map(str::to_string).unwrap_or(message));
                return None;
            }
            let whole = whole_number(value, number);
            if whole.is_none() {
                violations.push(path, "Number is too large");
            }
            whole
        }
        FieldKind::Number { min, max } => {
            let Some(number) = value.as_f64() else {
                violations.push(path, type_message(rule, "number", value));
                return None;
            };
            if let Some(message) = range_message(number, min, max) {
                violations.push(path, rule.messages.invalid.map(str::to_string).unwrap_or(message));
                return None;
            }
            Some(value.clone())
        }
        FieldKind::Url => {
            let Some(text) = value.as_str() else {
                violations.push(path, type_message(rule, "string", value));
                return None;
            };
            if url::Url::parse(text).is_err() {
                violations.push(path, rule.messages.invalid.unwrap_or("Invalid url"));
                return None;
            }
            Some(Value::from(text))
        }
        FieldKind::EnumList(allowed) => {
            let Some(items) = value.as_array() else {
                violations.push(path, type_message(rule, "array", value));
                return None;
            };
            let mut valid = true;
            for (index, item) in items.iter().enumerate() {
                match item.as_str() {
                    Some(name) if allowed.iter().any(|option| *option == name) => {}
                    _ => {
                        valid = false;
                        violations.push(format!("{path}.{index}"), enum_message(allowed, item));
                    }
                }
            }
            valid.then(|| value.clone())
        }
    }
}

/// Integer form of an accepted whole number, `None` once it leaves the
/// 64-bit range.
fn whole_number(value: &Value, number: f64) -> Option<Value> {
    if value.is_i64() || value.is_u64() {
        return Some(value.clone());
    }
    if (0.0..u64::MAX as f64).contains(&number) {
        Some(Value::from(number as u64))
    } else if (i64::MIN as f64..0.0).contains(&number) {
        Some(Value::from(number as i64))
    } else {
        None
    }
}

fn range_message(number: f64, min: Option<Bound>, max: Option<Bound>) -> Option<String> {
    match min {
        Some(Bound::Inclusive(limit)) if number < limit => {
            return Some(format!("Number must be greater than or equal to {limit}"));
        }
        Some(Bound::Exclusive(limit)) if number <= limit => {
            return Some(format!("Number must be greater than {limit}"));
        }
        _ => {}
    }

    match max {
        Some(Bound::Inclusive(limit)) if number > limit => {
            Some(format!("Number must be less than or equal to {limit}"))
        }
        Some(Bound::Exclusive(limit)) if number >= limit => {
            Some(format!("Number must be less than {limit}"))
        }
        _ => None,
    }
}

fn type_message(rule: &FieldRule, expected: &str, received: &Value) -> String {
    match rule.messages.invalid_type {
        Some(message) => message.to_string(),
        None => format!("Expected {expected}, received {}", type_name(received)),
    }
}

fn enum_message(allowed: &[&str], received: &Value) -> String {
    let options = allowed
        .iter()
        .map(|name| format!("'{name}'"))
        .collect::<Vec<_>>()
        .join(" | ");

    match received.as_str() {
        Some(name) => format!("Invalid enum value. Expected {options}, received '{name}'"),
        None => format!(
            "Invalid enum value. Expected {options}, received {}",
            type_name(received)
        ),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
