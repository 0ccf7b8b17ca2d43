//! The validation engine.
//!
//! [`Validator`] maps field names to [`FieldValidator`]s, runs every rule they
//! expose and collects failures into an [`ErrorMap`]. A panic inside one
//! field is caught at the field boundary and recorded as an error on that
//! field; other fields are still evaluated.
//!
//! # Examples
//!
//! ```rust,ignore
//! use field_validator::prelude::*;
//!
//! let mut validator = Validator::new();
//! validator
//!     .options(ValidatorOptions::default().with_default_code(422))
//!     .field("name", string("ab").min_len(3).max_len(5))
//!     .field("email", string("").not_empty())
//!     .run();
//!
//! assert!(!validator.is_ok());
//! assert_eq!(validator.errs()["name"][0].code, 422);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::foundation::{
    BoxedFieldValidator, ErrorMap, EvaluationFault, FieldValidator, ValidationError,
    ValidatorOptions,
};

/// Field names mapped to the validators registered for them.
///
/// Order across fields is irrelevant; order within a field is evaluation
/// order.
pub type ValidatorMap = HashMap<String, Vec<BoxedFieldValidator>>;

/// Holds the validator map, the collected errors and the options used to
/// run them.
///
/// An engine is single-use: create a new one to validate again.
#[derive(Default)]
pub struct Validator {
    validator_map: ValidatorMap,
    errs: ErrorMap,
    opts: ValidatorOptions,
}

impl Validator {
    /// Creates an engine with no rules, no errors and zero-value options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the options used by [`run`](Self::run).
    pub fn options(&mut self, opts: ValidatorOptions) -> &mut Self {
        self.opts = opts;
        self
    }

    /// Current options.
    pub fn opts(&self) -> &ValidatorOptions {
        &self.opts
    }

    /// Merges `rules` into the engine.
    ///
    /// A field present in `rules` replaces whatever was registered for it
    /// before. Use [`with`](Self::with) to append instead.
    pub fn rules(&mut self, rules: ValidatorMap) -> &mut Self {
        self.validator_map.extend(rules);
        self
    }

    /// Appends validators to a field's existing sequence.
    pub fn with<I>(&mut self, field: impl Into<String>, validators: I) -> &mut Self
    where
        I: IntoIterator<Item = BoxedFieldValidator>,
    {
        self.validator_map
            .entry(field.into())
            .or_default()
            .extend(validators);
        self
    }

    /// Appends a single validator to a field.
    pub fn field<V>(&mut self, field: impl Into<String>, validator: V) -> &mut Self
    where
        V: FieldValidator + 'static,
    {
        self.with(field, [Box::new(validator) as BoxedFieldValidator])
    }

    /// Runs `closure` against the engine, recording a panic as an error on
    /// `field` instead of unwinding.
    ///
    /// Registrations the closure made before panicking are kept. The panic
    /// still goes through the process panic hook, so the default hook prints
    /// its message to stderr; install a quiet hook with
    /// [`std::panic::set_hook`] if that output is unwanted.
    pub fn with_recover<F>(&mut self, field: impl Into<String>, closure: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        let field = field.into();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| closure(&mut *self)));

        if let Err(payload) = outcome {
            let fault = EvaluationFault::Registration(EvaluationFault::describe(&*payload));
            tracing::warn!(field = %field, %fault, "recovered from panic while registering rules");
            record(&mut self.errs, &self.opts, &field, ValidationError::from_err(fault));
        }

        self
    }

    /// Evaluates every registered rule.
    ///
    /// Failures get the default code (if one is configured and theirs is
    /// unset) and are appended to their field. With `bail` set, a field stops
    /// at its first failure. Nothing propagates out of this call; inspect
    /// [`is_ok`](Self::is_ok) or [`errs`](Self::errs) afterwards.
    ///
    /// A panicking rule is recorded on its field, but the panic hook has
    /// already run by then; with the default hook it is reported on stderr.
    pub fn run(&mut self) -> &mut Self {
        let Self {
            validator_map,
            errs,
            opts,
        } = &mut *self;

        tracing::debug!(fields = validator_map.len(), bail = opts.bail, "running validation");

        for (field, validators) in validator_map.iter() {
            let outcome =
                panic::catch_unwind(AssertUnwindSafe(|| run_field(field, validators, errs, opts)));

            if let Err(payload) = outcome {
                let fault = EvaluationFault::Rule(EvaluationFault::describe(&*payload));
                tracing::warn!(field = %field, %fault, "recovered from panic while validating");
                record(errs, opts, field, ValidationError::from_err(fault));
            }
        }

        tracing::debug!(
            failed_fields = errs.len(),
            errors = errs.error_count(),
            "validation finished"
        );

        self
    }

    /// Errors collected so far; empty means success.
    pub fn errs(&self) -> &ErrorMap {
        &self.errs
    }

    /// Consumes the engine, returning the collected errors.
    pub fn into_errs(self) -> ErrorMap {
        self.errs
    }

    /// Returns true if no errors were recorded.
    pub fn is_ok(&self) -> bool {
        self.errs.is_empty()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<_> = self.validator_map.keys().collect();
        fields.sort();
        f.debug_struct("Validator")
            .field("fields", &fields)
            .field("errs", &self.errs)
            .field("opts", &self.opts)
            .finish()
    }
}

fn run_field(
    field: &str,
    validators: &[BoxedFieldValidator],
    errs: &mut ErrorMap,
    opts: &ValidatorOptions,
) {
    for validator in validators {
        if !validator.is_present() {
            tracing::trace!(field, "skipping absent validator");
            continue;
        }

        for rule in validator.rules() {
            if let Some(err) = rule() {
                record(errs, opts, field, err);
                if opts.bail {
                    return;
                }
            }
        }
    }
}

fn record(errs: &mut ErrorMap, opts: &ValidatorOptions, field: &str, mut err: ValidationError) {
    err.apply_defaults(opts);
    tracing::trace!(field, error = %err, "rule failed");
    errs.add(field, err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Rule, RuleSet, Rules};
    use pretty_assertions::assert_eq;

    struct Fails(&'static str);

    impl FieldValidator for Fails {
        fn rules(&self) -> Rules<'_> {
            let rule: Rule<'_> = Box::new(move || Some(ValidationError::msg(self.0)));
            vec![rule]
        }
    }

    struct Panics;

    impl FieldValidator for Panics {
        fn rules(&self) -> Rules<'_> {
            let rule: Rule<'_> =
                Box::new(|| -> Option<ValidationError> { panic!("rule exploded") });
            vec![rule]
        }
    }

    fn messages(v: &Validator, field: &str) -> Vec<String> {
        v.errs()
            .get(field)
            .unwrap_or_default()
            .iter()
            .map(|e| e.msg.clone())
            .collect()
    }

    #[test]
    fn empty_engine_is_ok() {
        let mut v = Validator::new();
        assert!(v.run().is_ok());
        assert!(v.errs().is_empty());
    }

    #[test]
    fn rules_overwrite_whole_field() {
        let mut first = ValidatorMap::new();
        first.insert("f".into(), vec![Box::new(Fails("old")) as BoxedFieldValidator]);
        let mut second = ValidatorMap::new();
        second.insert("f".into(), vec![Box::new(Fails("new")) as BoxedFieldValidator]);

        let mut v = Validator::new();
        v.rules(first).rules(second).run();
        assert_eq!(messages(&v, "f"), vec!["new"]);
    }

    #[test]
    fn with_appends() {
        let mut v = Validator::new();
        v.field("f", Fails("a")).field("f", Fails("b")).run();
        assert_eq!(messages(&v, "f"), vec!["a", "b"]);
    }

    #[test]
    fn bail_stops_the_whole_field() {
        let mut v = Validator::new();
        v.options(ValidatorOptions::default().with_bail(true))
            .field("f", Fails("a"))
            .field("f", Fails("b"))
            .field("g", Fails("c"))
            .run();
        assert_eq!(messages(&v, "f"), vec!["a"]);
        assert_eq!(messages(&v, "g"), vec!["c"]);
    }

    #[test]
    fn panic_is_isolated_to_its_field() {
        let mut v = Validator::new();
        v.options(ValidatorOptions::default().with_default_code(9))
            .field("boom", Fails("before"))
            .field("boom", Panics)
            .field("boom", Fails("after"))
            .field("fine", Fails("x"))
            .run();

        let boom = &v.errs()["boom"];
        assert_eq!(boom.len(), 2);
        assert_eq!(boom[0].msg, "before");
        assert_eq!(
            boom[1].err.as_ref().map(ToString::to_string).as_deref(),
            Some("panic while validating: rule exploded")
        );
        assert_eq!(boom[1].code, 9);
        assert_eq!(messages(&v, "fine"), vec!["x"]);
    }

    #[test]
    fn with_recover_keeps_earlier_registrations() {
        let mut v = Validator::new();
        v.with_recover("setup", |v| {
            v.field("a", Fails("registered"));
            panic!("closure exploded");
        })
        .run();

        assert_eq!(messages(&v, "a"), vec!["registered"]);
        let setup = &v.errs()["setup"];
        assert_eq!(setup.len(), 1);
        assert_eq!(
            setup[0].to_string(),
            "Validation error: panic while adding rule: closure exploded"
        );
    }

    #[test]
    fn with_recover_applies_default_code() {
        let mut v = Validator::new();
        v.options(ValidatorOptions::default().with_default_code(77))
            .with_recover("setup", |_| panic!("closure exploded"));

        let setup = &v.errs()["setup"];
        assert_eq!(setup.len(), 1);
        assert_eq!(setup[0].code, 77);
        assert_eq!(
            setup[0].to_string(),
            "Validation error: panic while adding rule: closure exploded; code=77"
        );
    }

    #[test]
    fn absent_validator_is_skipped() {
        let absent: Option<RuleSet<i32>> = None;
        let mut v = Validator::new();
        v.field("f", absent).run();
        assert!(v.is_ok());
    }

    #[test]
    fn debug_lists_fields() {
        let mut v = Validator::new();
        v.field("b", Fails("x")).field("a", Fails("y"));
        let rendered = format!("{v:?}");
        assert!(rendered.contains(r#"fields: ["a", "b"]"#));
    }
}
