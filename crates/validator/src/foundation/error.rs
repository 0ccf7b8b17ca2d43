//! Error types for validation failures
//!
//! This module provides the structured [`ValidationError`] produced by rules,
//! the [`ErrorMap`] that collects them per field, and the [`EvaluationFault`]
//! used when a rule or a registration closure panics.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::error::Error as StdError;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::foundation::ValidatorOptions;

/// Shared, cloneable cause attached to a [`ValidationError`].
pub type ErrorCause = Arc<dyn StdError + Send + Sync + 'static>;

/// Message used by [`ErrorMap::first`] when no real error is available.
pub const UNKNOWN_ERROR: &str = "Unknown error";

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single validation failure.
///
/// `msg` describes an invalid value ("must not be empty"), `err` carries an
/// actual error raised while validating that is unrelated to the value
/// itself. An empty `msg` and a zero `code` mean "unset".
///
/// # Examples
///
/// ```rust,ignore
/// use field_validator::foundation::ValidationError;
///
/// let error = ValidationError::msg("must be at least 3 characters long, but is 2")
///     .with_code(422);
/// assert_eq!(
///     error.to_string(),
///     "Validation failed: must be at least 3 characters long, but is 2; code=422"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationError {
    /// Human-readable description of why the value is invalid.
    pub msg: String,

    /// Underlying cause, if validation itself went wrong.
    pub err: Option<ErrorCause>,

    /// Numeric classification; `0` means unset.
    pub code: i32,
}

impl ValidationError {
    /// Creates an error carrying only a message.
    pub fn msg(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            ..Self::default()
        }
    }

    /// Creates an error carrying only an underlying cause.
    pub fn from_err<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            err: Some(Arc::new(err)),
            ..Self::default()
        }
    }

    /// Sets the numeric code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: i32) -> Self {
        self.code = code;
        self
    }

    /// Attaches an underlying cause.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_err<E>(mut self, err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.err = Some(Arc::new(err));
        self
    }

    /// Backfills values from `opts` that this error left unset.
    ///
    /// Only the code is affected, and only when it is still `0`.
    pub fn apply_defaults(&mut self, opts: &ValidatorOptions) {
        if self.code == 0 && opts.default_code != 0 {
            self.code = opts.default_code;
        }
    }

    /// Returns true if neither a message nor a cause is set.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.msg.is_empty() && self.err.is_none()
    }

    fn unknown() -> Self {
        Self::msg(UNKNOWN_ERROR)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.err {
            Some(err) => write!(f, "Validation error: {err}")?,
            None => write!(f, "Validation failed: {}", self.msg)?,
        }
        if self.code != 0 {
            write!(f, "; code={}", self.code)?;
        }
        Ok(())
    }
}

impl StdError for ValidationError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.err
            .as_deref()
            .map(|err| err as &(dyn StdError + 'static))
    }
}

// Causes are compared by their rendered text; trait objects have no equality.
impl PartialEq for ValidationError {
    fn eq(&self, other: &Self) -> bool {
        self.msg == other.msg
            && self.code == other.code
            && self.err.as_ref().map(ToString::to_string)
                == other.err.as_ref().map(ToString::to_string)
    }
}

impl Eq for ValidationError {}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.err.is_some() { 3 } else { 2 };
        let mut state = serializer.serialize_struct("ValidationError", len)?;
        state.serialize_field("msg", &self.msg)?;
        if let Some(err) = &self.err {
            state.serialize_field("err", &err.to_string())?;
        }
        state.serialize_field("code", &self.code)?;
        state.end()
    }
}

// ============================================================================
// EVALUATION FAULT
// ============================================================================

/// A panic caught by the engine and recorded as a field error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationFault {
    /// A rule panicked while the engine was running it.
    #[error("panic while validating: {0}")]
    Rule(String),

    /// A `with_recover` closure panicked while registering rules.
    #[error("panic while adding rule: {0}")]
    Registration(String),
}

impl EvaluationFault {
    /// Renders a panic payload as text.
    pub(crate) fn describe(payload: &(dyn std::any::Any + Send)) -> String {
        if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_owned()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "<non-string panic payload>".to_owned()
        }
    }
}

// ============================================================================
// ERROR MAP
// ============================================================================

/// Validation errors keyed by field name, in the order rules reported them.
///
/// A field missing from the map produced no failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<String, Vec<ValidationError>>,
}

impl ErrorMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an error to the field's error stack.
    pub fn add(&mut self, field: impl Into<String>, error: ValidationError) {
        self.errors.entry(field.into()).or_default().push(error);
    }

    /// Returns the first affected field and its first error.
    ///
    /// Fields are ordered by name, so with several failed fields this is the
    /// lexicographically smallest one. Inspect the whole map when more than
    /// one field can fail.
    ///
    /// An empty map yields `("", "Unknown error")`.
    #[must_use]
    pub fn first(&self) -> (&str, ValidationError) {
        match self.errors.iter().next() {
            Some((field, errors)) => (
                field.as_str(),
                errors.first().cloned().unwrap_or_else(ValidationError::unknown),
            ),
            None => ("", ValidationError::unknown()),
        }
    }

    /// Errors recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[ValidationError]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// Returns true if `field` has recorded errors.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of errors across all fields.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Names of the failed fields.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// Iterates over `(field, errors)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ValidationError])> {
        self.errors
            .iter()
            .map(|(field, errors)| (field.as_str(), errors.as_slice()))
    }

    /// Converts the map to a JSON object of `field -> [error, ...]`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Index<&str> for ErrorMap {
    type Output = [ValidationError];

    fn index(&self, field: &str) -> &Self::Output {
        match self.errors.get(field) {
            Some(errors) => errors,
            None => panic!("no validation errors recorded for field `{field}`"),
        }
    }
}

impl IntoIterator for ErrorMap {
    type Item = (String, Vec<ValidationError>);
    type IntoIter = btree_map::IntoIter<String, Vec<ValidationError>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl Serialize for ErrorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.errors.serialize(serializer)
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, errors) in &self.errors {
            for error in errors {
                writeln!(f, "{field}: {error}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, thiserror::Error)]
    #[error("Oops!")]
    struct Oops;

    #[test]
    fn add_creates_and_appends() {
        let mut map = ErrorMap::new();
        map.add("field1", ValidationError::msg("first"));
        map.add("field1", ValidationError::msg("second"));

        assert_eq!(map.len(), 1);
        assert_eq!(map.error_count(), 2);
        assert_eq!(map["field1"][1].msg, "second");
    }

    #[test]
    fn first_on_single_field() {
        let mut map = ErrorMap::new();
        map.add("field2", ValidationError::from_err(Oops));

        let (field, err) = map.first();
        assert_eq!(field, "field2");
        assert_eq!(err, ValidationError::from_err(Oops));
    }

    #[test]
    fn first_on_empty_map() {
        let map = ErrorMap::new();
        let (field, err) = map.first();
        assert_eq!(field, "");
        assert_eq!(err.msg, UNKNOWN_ERROR);
    }

    #[test]
    fn first_on_empty_error_list() {
        let mut map = ErrorMap::new();
        map.errors.insert("ghost".into(), Vec::new());

        let (field, err) = map.first();
        assert_eq!(field, "ghost");
        assert_eq!(err.msg, UNKNOWN_ERROR);
    }

    #[test]
    fn apply_defaults_fills_unset_code() {
        let opts = ValidatorOptions::default().with_default_code(42);
        let mut err = ValidationError::msg("Oopsie");
        err.apply_defaults(&opts);
        assert_eq!(err.code, 42);
    }

    #[test]
    fn apply_defaults_keeps_explicit_code() {
        let opts = ValidatorOptions::default().with_default_code(42);
        let mut err = ValidationError::msg("Oopsie").with_code(7);
        err.apply_defaults(&opts);
        assert_eq!(err.code, 7);
    }

    #[test]
    fn display_formats() {
        assert_eq!(
            ValidationError::msg("must be nil").to_string(),
            "Validation failed: must be nil"
        );
        assert_eq!(
            ValidationError::from_err(Oops).with_code(3).to_string(),
            "Validation error: Oops!; code=3"
        );
    }

    #[test]
    fn source_exposes_cause() {
        let err = ValidationError::from_err(Oops);
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("Oops!"));
        assert!(ValidationError::msg("x").source().is_none());
    }

    #[test]
    fn blank_error() {
        assert!(ValidationError::default().is_blank());
        assert!(!ValidationError::msg("x").is_blank());
    }

    #[test]
    fn describe_panic_payloads() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(EvaluationFault::describe(payload.as_ref()), "boom");

        let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("bang"));
        assert_eq!(EvaluationFault::describe(payload.as_ref()), "bang");

        let payload: Box<dyn std::any::Any + Send> = Box::new(17_u8);
        assert_eq!(
            EvaluationFault::describe(payload.as_ref()),
            "<non-string panic payload>"
        );
    }

    #[test]
    fn to_json_shape() {
        let mut map = ErrorMap::new();
        map.add("name", ValidationError::msg("must not be empty").with_code(1));
        map.add("age", ValidationError::from_err(Oops));

        assert_eq!(
            map.to_json(),
            serde_json::json!({
                "age": [{ "msg": "", "err": "Oops!", "code": 0 }],
                "name": [{ "msg": "must not be empty", "code": 1 }],
            })
        );
    }
}
