//! Built-in validators
//!
//! Each validator holds one value and builds rules against it through chained
//! calls. Nothing is checked until the engine runs the rules.
//!
//! - **String**: [`StringValidator`] via [`string`]
//! - **Nullable**: [`AnyValidator`] via [`any`], over the [`Nullable`] capability
//! - **Custom**: [`CustomValidator`] via [`custom`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use field_validator::prelude::*;
//!
//! let name = string("alice").not_empty().max_len(20);
//! let parent = any(None::<u64>).nil();
//! let answer = custom(42, |v: &i32| (*v != 42).then(|| ValidationError::msg("must equal 42")));
//! ```

pub mod custom;
pub mod length;
pub mod nullable;

pub use custom::{CustomValidator, custom};
pub use length::{LengthMode, StringValidator, string};
pub use nullable::{AnyValidator, Nullable, any};
