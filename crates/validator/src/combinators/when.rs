//! WHEN combinator - conditional validation
//!
//! [`when`] builds a validator only if a condition holds. With a false
//! condition it returns `None`, the absent validator: the engine skips it and
//! it never contributes an error, however the wrapped validator would have
//! judged the value.
//!
//! # Examples
//!
//! ```rust,ignore
//! use field_validator::prelude::*;
//!
//! let is_company = false;
//! let mut v = Validator::new();
//! v.field("vat_id", when(is_company, || string("").not_empty())).run();
//! assert!(v.is_ok()); // skipped
//! ```

use crate::foundation::FieldValidator;

/// Evaluates `factory` only when `condition` is true.
///
/// The result is itself a [`FieldValidator`]: `Some(v)` behaves exactly like
/// `v`, `None` is skipped.
pub fn when<V, F>(condition: bool, factory: F) -> Option<V>
where
    V: FieldValidator,
    F: FnOnce() -> V,
{
    condition.then(factory)
}

/// Evaluates `factory` only when `condition` is false.
pub fn unless<V, F>(condition: bool, factory: F) -> Option<V>
where
    V: FieldValidator,
    F: FnOnce() -> V,
{
    when(!condition, factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::string;
    use rstest::rstest;

    fn passes(v: &impl FieldValidator) -> bool {
        v.rules().iter().all(|rule| rule().is_none())
    }

    #[rstest]
    #[case::false_valid(false, "not-empty", true)]
    #[case::true_valid(true, "not-empty", true)]
    #[case::false_invalid(false, "", true)]
    #[case::true_invalid(true, "", false)]
    fn when_not_empty(#[case] condition: bool, #[case] value: &'static str, #[case] ok: bool) {
        let v = when(condition, || string(value).not_empty());
        assert_eq!(passes(&v), ok);
        assert_eq!(v.is_present(), condition);
    }

    #[test]
    fn factory_not_called_when_false() {
        let v = when(false, || -> crate::validators::StringValidator {
            unreachable!("factory must not run")
        });
        assert!(v.is_none());
    }

    #[test]
    fn unless_inverts() {
        assert!(unless(true, || string("")).is_none());
        assert!(!passes(&unless(false, || string("").not_empty())));
    }
}
