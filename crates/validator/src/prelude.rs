//! Prelude module for convenient imports.
//!
//! Provides a single `use field_validator::prelude::*;` import that brings
//! in the engine, the core traits and types, and every built-in validator.
//!
//! # Examples
//!
//! ```rust,ignore
//! use field_validator::prelude::*;
//!
//! let mut v = Validator::new();
//! v.field("name", string("alice").not_empty().max_len(20))
//!     .field("parent", any(None::<u64>).nil())
//!     .run();
//! assert!(v.is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, options
// ============================================================================

pub use crate::foundation::{
    BoxedFieldValidator, ErrorMap, EvaluationFault, FieldValidator, Rule, RuleSet, Rules,
    ValidationError, ValidatorOptions,
};

// ============================================================================
// ENGINE
// ============================================================================

pub use crate::engine::{Validator, ValidatorMap};

// ============================================================================
// VALIDATORS & COMBINATORS
// ============================================================================

pub use crate::combinators::{unless, when};
pub use crate::validators::{
    AnyValidator, CustomValidator, LengthMode, Nullable, StringValidator, any, custom, string,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{for_field, validator_map};
