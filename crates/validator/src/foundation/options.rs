//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Options controlling how [`Validator::run`](crate::Validator::run) treats failures.
///
/// The zero value (`Default`) evaluates every rule and leaves codes untouched.
/// Missing keys deserialize to their defaults, so the struct can be embedded
/// in a host application's configuration:
///
/// ```rust,ignore
/// let opts: ValidatorOptions = serde_json::from_str(r#"{ "bail": true }"#)?;
/// assert_eq!(opts.default_code, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorOptions {
    /// Stop evaluating a field's remaining rules after its first failure.
    pub bail: bool,

    /// Code backfilled into every recorded error whose code is `0`.
    pub default_code: i32,
}

impl ValidatorOptions {
    /// Sets [`bail`](Self::bail).
    pub fn with_bail(mut self, bail: bool) -> Self {
        self.bail = bail;
        self
    }

    /// Sets [`default_code`](Self::default_code).
    pub fn with_default_code(mut self, code: i32) -> Self {
        self.default_code = code;
        self
    }
}
