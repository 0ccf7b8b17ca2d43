//! Nil checks for optional values
//!
//! [`AnyValidator`] checks whether a value is "nil" through the [`Nullable`]
//! capability rather than by inspecting its runtime type. `Option<T>` is the
//! base case; references and smart pointers forward to what they wrap, so a
//! `None` held behind an `Arc` is nil as well.
//!
//! # Examples
//!
//! ```rust,ignore
//! use field_validator::prelude::*;
//!
//! let parent: Option<Box<Node>> = None;
//! let mut v = Validator::new();
//! v.field("parent", any(parent).not_nil()).run();
//! assert_eq!(v.errs()["parent"][0].msg, "must be not nil");
//! ```

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::foundation::{FieldValidator, RuleSet, Rules, ValidationError};

// ============================================================================
// NULLABLE
// ============================================================================

/// Values that can be absent.
pub trait Nullable {
    /// Returns true if the value is absent.
    fn is_nil(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<T: Nullable + ?Sized> Nullable for Box<T> {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<T: Nullable + ?Sized> Nullable for Rc<T> {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<T: Nullable + ?Sized> Nullable for Arc<T> {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

// ============================================================================
// ANY VALIDATOR
// ============================================================================

/// Builds nil / not-nil rules against a [`Nullable`] value.
pub struct AnyValidator<T> {
    set: RuleSet<T>,
}

impl<T: Nullable + 'static> AnyValidator<T> {
    /// Creates a validator for `value` with no rules.
    pub fn new(value: T) -> Self {
        Self {
            set: RuleSet::new(value),
        }
    }

    /// The held value.
    pub fn value(&self) -> &T {
        self.set.value()
    }

    /// The value must be nil.
    pub fn nil(mut self) -> Self {
        self.set
            .add_rule(|v| (!v.is_nil()).then(|| ValidationError::msg("must be nil")));
        self
    }

    /// The value must not be nil.
    pub fn not_nil(mut self) -> Self {
        self.set
            .add_rule(|v| v.is_nil().then(|| ValidationError::msg("must be not nil")));
        self
    }
}

impl<T> FieldValidator for AnyValidator<T> {
    fn rules(&self) -> Rules<'_> {
        self.set.rules()
    }
}

impl<T: fmt::Debug> fmt::Debug for AnyValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyValidator").field("set", &self.set).finish()
    }
}

/// Creates an [`AnyValidator`] for `value`.
#[must_use]
pub fn any<T: Nullable + 'static>(value: T) -> AnyValidator<T> {
    AnyValidator::new(value)
}
