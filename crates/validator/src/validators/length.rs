//! String validators
//!
//! [`StringValidator`] holds a string and accumulates emptiness and length
//! checks against it. By default, length is measured in bytes
//! (`str::len`). Call [`StringValidator::chars`] to count Unicode scalar
//! values for the checks added after it.
//!
//! # Examples
//!
//! ```rust,ignore
//! use field_validator::prelude::*;
//!
//! let username = string("alice").not_empty().min_len(3).max_len(20);
//! ```

use std::fmt;

use crate::foundation::{FieldValidator, RuleSet, Rules, ValidationError};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes.
    #[default]
    Bytes,
    /// Count Unicode scalar values.
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

fn too_short(min: usize, len: usize) -> ValidationError {
    ValidationError::msg(format!(
        "must be at least {min} characters long, but is {len}"
    ))
}

fn too_long(max: usize, len: usize) -> ValidationError {
    ValidationError::msg(format!("must be at most {max} characters long, but is {len}"))
}

// ============================================================================
// STRING VALIDATOR
// ============================================================================

/// Builds rules against a string value.
pub struct StringValidator {
    set: RuleSet<String>,
    mode: LengthMode,
}

impl StringValidator {
    /// Creates a validator for `value` with no rules.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            set: RuleSet::new(value.into()),
            mode: LengthMode::Bytes,
        }
    }

    /// The held value.
    pub fn value(&self) -> &str {
        self.set.value()
    }

    /// Count chars instead of bytes in length checks added from here on.
    pub fn chars(mut self) -> Self {
        self.mode = LengthMode::Chars;
        self
    }

    /// The string must be empty.
    pub fn empty(mut self) -> Self {
        self.set
            .add_rule(|v| (!v.is_empty()).then(|| ValidationError::msg("must be empty")));
        self
    }

    /// The string must not be empty.
    pub fn not_empty(mut self) -> Self {
        self.set
            .add_rule(|v| v.is_empty().then(|| ValidationError::msg("must not be empty")));
        self
    }

    /// The string must be at least `min` long.
    pub fn min_len(mut self, min: usize) -> Self {
        let mode = self.mode;
        self.set.add_rule(move |v| {
            let len = mode.measure(v);
            (len < min).then(|| too_short(min, len))
        });
        self
    }

    /// The string must be at most `max` long.
    pub fn max_len(mut self, max: usize) -> Self {
        let mode = self.mode;
        self.set.add_rule(move |v| {
            let len = mode.measure(v);
            (len > max).then(|| too_long(max, len))
        });
        self
    }

    /// The string length must lie in `min..=max`; one rule covering both ends.
    pub fn len_between(mut self, min: usize, max: usize) -> Self {
        let mode = self.mode;
        self.set.add_rule(move |v| {
            let len = mode.measure(v);
            if len < min {
                Some(too_short(min, len))
            } else if len > max {
                Some(too_long(max, len))
            } else {
                None
            }
        });
        self
    }
}

impl FieldValidator for StringValidator {
    fn rules(&self) -> Rules<'_> {
        self.set.rules()
    }
}

impl fmt::Debug for StringValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringValidator")
            .field("value", &self.value())
            .field("rules", &self.set.len())
            .field("mode", &self.mode)
            .finish()
    }
}

/// Creates a [`StringValidator`] for `value`.
#[must_use]
pub fn string(value: impl Into<String>) -> StringValidator {
    StringValidator::new(value)
}
