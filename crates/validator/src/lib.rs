//! # field-validator
//!
//! Attach named rules to arbitrary values, run them, and collect structured
//! errors keyed by field name.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use field_validator::prelude::*;
//!
//! let mut v = Validator::new();
//! v.options(ValidatorOptions::default().with_bail(true))
//!     .field("name", string("ab").min_len(3).max_len(5))
//!     .field("age", string("").not_empty())
//!     .run();
//!
//! assert!(!v.is_ok());
//! let (field, err) = v.errs().first();
//! assert_eq!(field, "age");
//! assert_eq!(err.msg, "must not be empty");
//! ```
//!
//! ## Writing Validators
//!
//! Implement [`FieldValidator`](foundation::FieldValidator) for anything that
//! can list its rules, or wrap a predicate with
//! [`custom`](validators::custom) for one-off checks.
//!
//! ## Built-in Validators
//!
//! - **String**: [`StringValidator`](validators::StringValidator) —
//!   `empty`, `not_empty`, `min_len`, `max_len`, `len_between`
//! - **Nullable**: [`AnyValidator`](validators::AnyValidator) — `nil`, `not_nil`
//! - **Custom**: [`CustomValidator`](validators::CustomValidator)
//! - **Conditional**: [`when`](combinators::when), [`unless`](combinators::unless)

pub mod combinators;
pub mod engine;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

pub use engine::{Validator, ValidatorMap};
pub use foundation::{ErrorMap, FieldValidator, ValidationError, ValidatorOptions};
