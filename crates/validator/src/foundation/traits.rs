//! Core traits for the validation system
//!
//! A [`Rule`] is a zero-argument check; a [`FieldValidator`] hands the engine
//! an ordered list of them. Built-in validators keep their value and checks in
//! a [`RuleSet`] and only turn them into rules when asked.

use crate::foundation::ValidationError;

// ============================================================================
// RULES
// ============================================================================

/// A single check against a value held by its validator.
///
/// Returns `None` when the value passes.
pub type Rule<'a> = Box<dyn Fn() -> Option<ValidationError> + 'a>;

/// Rules in registration order.
pub type Rules<'a> = Vec<Rule<'a>>;

/// A check waiting for the value it will be applied to.
pub type Check<T> = Box<dyn Fn(&T) -> Option<ValidationError>>;

// ============================================================================
// FIELD VALIDATOR
// ============================================================================

/// The capability every validator plugs into the engine through.
///
/// # Examples
///
/// ```rust,ignore
/// use field_validator::foundation::{FieldValidator, Rules, ValidationError};
///
/// struct Even(i64);
///
/// impl FieldValidator for Even {
///     fn rules(&self) -> Rules<'_> {
///         vec![Box::new(move || {
///             (self.0 % 2 != 0).then(|| ValidationError::msg("must be even"))
///         })]
///     }
/// }
/// ```
pub trait FieldValidator {
    /// Returns the rules to evaluate, in order.
    ///
    /// Rules must not run here; the engine invokes them.
    fn rules(&self) -> Rules<'_>;

    /// Returns false for an absent validator, which the engine skips.
    fn is_present(&self) -> bool {
        true
    }
}

/// A type-erased validator as stored by the engine.
pub type BoxedFieldValidator = Box<dyn FieldValidator>;

impl<V: FieldValidator + ?Sized> FieldValidator for Box<V> {
    fn rules(&self) -> Rules<'_> {
        (**self).rules()
    }

    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

// `None` is the absent validator produced by `when(false, ..)`.
impl<V: FieldValidator> FieldValidator for Option<V> {
    fn rules(&self) -> Rules<'_> {
        self.as_ref().map(FieldValidator::rules).unwrap_or_default()
    }

    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(FieldValidator::is_present)
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// Bookkeeping shared by the built-in validators: the held value plus the
/// checks registered against it.
pub struct RuleSet<T> {
    value: T,
    checks: Vec<Check<T>>,
}

impl<T> RuleSet<T> {
    /// Creates an empty rule set around `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            checks: Vec::new(),
        }
    }

    /// The held value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Appends a check to the stack.
    pub fn add_rule<F>(&mut self, check: F)
    where
        F: Fn(&T) -> Option<ValidationError> + 'static,
    {
        self.checks.push(Box::new(check));
    }

    /// Number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true if no check was registered.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl<T> FieldValidator for RuleSet<T> {
    fn rules(&self) -> Rules<'_> {
        self.checks
            .iter()
            .map(|check| {
                let rule: Rule<'_> = Box::new(move || check(&self.value));
                rule
            })
            .collect()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for RuleSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("value", &self.value)
            .field("checks", &self.checks.len())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
