//! Custom predicate validator
//!
//! The escape hatch for domain checks that have no dedicated validator: wrap
//! any `Fn(&T) -> Option<ValidationError>` around a value.
//!
//! # Examples
//!
//! ```rust,ignore
//! use field_validator::prelude::*;
//!
//! fn is_42(v: &i32) -> Option<ValidationError> {
//!     (*v != 42).then(|| ValidationError::msg("must equal 42"))
//! }
//!
//! let mut v = Validator::new();
//! v.field("answer", custom(12, is_42)).run();
//! assert!(!v.is_ok());
//! ```

use std::fmt;

use crate::foundation::{FieldValidator, RuleSet, Rules, ValidationError};

/// Wraps predicate functions as rules bound to one value.
pub struct CustomValidator<T> {
    set: RuleSet<T>,
}

impl<T: 'static> CustomValidator<T> {
    /// Creates a validator for `value` with `rule` as its only rule.
    pub fn new<F>(value: T, rule: F) -> Self
    where
        F: Fn(&T) -> Option<ValidationError> + 'static,
    {
        let mut set = RuleSet::new(value);
        set.add_rule(rule);
        Self { set }
    }

    /// Adds another predicate against the same value.
    pub fn and_then<F>(mut self, rule: F) -> Self
    where
        F: Fn(&T) -> Option<ValidationError> + 'static,
    {
        self.set.add_rule(rule);
        self
    }

    /// The held value.
    pub fn value(&self) -> &T {
        self.set.value()
    }
}

impl<T> FieldValidator for CustomValidator<T> {
    fn rules(&self) -> Rules<'_> {
        self.set.rules()
    }
}

impl<T: fmt::Debug> fmt::Debug for CustomValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomValidator")
            .field("set", &self.set)
            .finish()
    }
}

/// Creates a [`CustomValidator`] from a value and a predicate.
pub fn custom<T, F>(value: T, rule: F) -> CustomValidator<T>
where
    T: 'static,
    F: Fn(&T) -> Option<ValidationError> + 'static,
{
    CustomValidator::new(value, rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn is_42(v: &i32) -> Option<ValidationError> {
        (*v != 42).then(|| ValidationError::msg("must equal 42"))
    }

    fn len_between_10_and_20(v: &String) -> Option<ValidationError> {
        let len = v.len();
        (!(10..=20).contains(&len))
            .then(|| ValidationError::msg(format!("len must be between 10 and 20 but is {len}")))
    }

    fn outcome<T>(v: &CustomValidator<T>) -> Vec<ValidationError> {
        v.rules().iter().filter_map(|rule| rule()).collect()
    }

    #[rstest]
    #[case(12, false)]
    #[case(42, true)]
    #[case(-99, false)]
    fn custom_int(#[case] value: i32, #[case] ok: bool) {
        assert_eq!(outcome(&custom(value, is_42)).is_empty(), ok);
    }

    #[rstest]
    #[case::too_short("a", false)]
    #[case::valid("aaaaaaaaaaaaaaa", true)]
    #[case::too_long("aaaaaaaaaaaaaaaaaaaaa", false)]
    fn custom_string(#[case] value: &str, #[case] ok: bool) {
        let v = custom(value.to_owned(), len_between_10_and_20);
        assert_eq!(outcome(&v).is_empty(), ok);
    }

    #[test]
    fn value_is_bound_at_construction() {
        let mut value = 42;
        let v = custom(value, is_42);
        value = 0;
        assert_eq!(value, 0);
        assert!(outcome(&v).is_empty());
    }

    #[test]
    fn and_then_chains_in_order() {
        let v = custom(5_u32, |_| Some(ValidationError::msg("first")))
            .and_then(|_| Some(ValidationError::msg("second")));
        let msgs: Vec<_> = outcome(&v).into_iter().map(|e| e.msg).collect();
        assert_eq!(msgs, vec!["first", "second"]);
    }
}
