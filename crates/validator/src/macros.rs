//! Macros for registering validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`for_field!`] — Box a list of validators for one field
//! - [`validator_map!`] — Build a [`ValidatorMap`](crate::ValidatorMap) literal
//!
//! # Examples
//!
//! ```rust,ignore
//! use field_validator::prelude::*;
//!
//! let mut v = Validator::new();
//! v.rules(validator_map! {
//!     "name" => for_field![string("ab").min_len(3), string("ab").max_len(5)],
//!     "parent" => for_field![any(None::<u32>).not_nil()],
//! })
//! .run();
//! ```

/// Boxes each validator so they can share one field's sequence.
///
/// Expands to a `Vec<BoxedFieldValidator>`, accepted by
/// [`Validator::with`](crate::Validator::with) and as a
/// [`ValidatorMap`](crate::ValidatorMap) value.
#[macro_export]
macro_rules! for_field {
    () => {
        ::std::vec::Vec::<$crate::foundation::BoxedFieldValidator>::new()
    };
    ($($validator:expr),+ $(,)?) => {
        ::std::vec![
            $(::std::boxed::Box::new($validator) as $crate::foundation::BoxedFieldValidator),+
        ]
    };
}

/// Builds a [`ValidatorMap`](crate::ValidatorMap) from `field => validators` pairs.
#[macro_export]
macro_rules! validator_map {
    ($($field:expr => $validators:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = $crate::ValidatorMap::new();
        $(
            map.insert(::std::string::String::from($field), $validators);
        )*
        map
    }};
}
