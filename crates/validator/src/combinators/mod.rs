//! Combinators that wrap other validators.
//!
//! - [`when`] / [`unless`]: build a validator only if a condition holds

pub mod when;

pub use when::{unless, when};
