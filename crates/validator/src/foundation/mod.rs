//! Core validation types and traits
//!
//! This module contains the building blocks every validator and the engine
//! share:
//!
//! - **Traits**: [`FieldValidator`], with [`Rule`] / [`Rules`] and the
//!   [`RuleSet`] helper behind the built-in validators
//! - **Errors**: [`ValidationError`], [`ErrorMap`], [`EvaluationFault`]
//! - **Options**: [`ValidatorOptions`]
//!
//! # Writing a validator
//!
//! Anything that can list its rules can be registered with the engine:
//!
//! ```rust,ignore
//! use field_validator::foundation::{FieldValidator, RuleSet, Rules, ValidationError};
//!
//! struct Port(RuleSet<u32>);
//!
//! impl Port {
//!     fn new(port: u32) -> Self {
//!         Self(RuleSet::new(port))
//!     }
//!
//!     fn unprivileged(mut self) -> Self {
//!         self.0.add_rule(|p| (*p < 1024).then(|| ValidationError::msg("must be >= 1024")));
//!         self
//!     }
//! }
//!
//! impl FieldValidator for Port {
//!     fn rules(&self) -> Rules<'_> {
//!         self.0.rules()
//!     }
//! }
//! ```

pub mod error;
pub mod options;
pub mod traits;

pub use error::{ErrorCause, ErrorMap, EvaluationFault, UNKNOWN_ERROR, ValidationError};
pub use options::ValidatorOptions;
pub use traits::{BoxedFieldValidator, Check, FieldValidator, Rule, RuleSet, Rules};
