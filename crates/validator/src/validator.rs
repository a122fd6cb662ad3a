//! Running rules over a field set.
//!
//! For each field, in set order, rules run in list order against the field's
//! value. The first failing rule records its message under the field's name
//! and the field's remaining rules are skipped, so a field has at most one
//! entry in the resulting [`ErrorMap`].

use crate::field::{Field, FieldSet};
use crate::foundation::ErrorMap;
use crate::messages::Messages;

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates field sets against a message catalog.
///
/// Holds no per-run state: one validator can serve any number of field sets,
/// concurrently.
///
/// # Examples
///
/// ```
/// use fieldguard::prelude::*;
///
/// let messages = Messages {
///     mandatory_field: "Campo obrigatório".into(),
///     ..Messages::default()
/// };
/// let validator = Validator::with_messages(messages);
///
/// let fields = FieldSet::from(vec![Field::new("name", "", rules![required()])]);
/// let report = validator.validate(&fields);
///
/// assert!(!report.is_valid());
/// assert_eq!(report.errors().get("name"), Some("Campo obrigatório"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    messages: Messages,
}

impl Validator {
    /// A validator using the default message catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_messages(messages: Messages) -> Self {
        Self { messages }
    }

    #[must_use]
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Checks every field and collects the first failure of each.
    pub fn validate(&self, fields: &FieldSet) -> Report {
        let mut errors = ErrorMap::new();

        for field in fields {
            if let Some(message) = self.first_failure(field) {
                errors.insert(field.name.as_str(), message);
            }
        }

        tracing::debug!(
            fields = fields.len(),
            failures = errors.len(),
            "validation finished"
        );

        Report { errors }
    }

    fn first_failure(&self, field: &Field) -> Option<String> {
        for rule in &field.rules {
            tracing::trace!(
                field = %field.name,
                rule = rule.name(),
                kind = field.value.kind(),
                "evaluating rule"
            );

            if !rule.evaluate(&field.value) {
                let message = rule.message(&field.value, &self.messages).into_owned();
                tracing::debug!(
                    field = %field.name,
                    rule = rule.name(),
                    message = %message,
                    "field failed validation"
                );
                return Some(message);
            }
        }
        None
    }
}

/// Validates with the default message catalog.
///
/// Returns the error map and whether it is empty.
///
/// ```
/// use fieldguard::prelude::*;
///
/// let fields = FieldSet::from(vec![
///     Field::new("email", "qqq@aaa", rules![email()]),
///     Field::new("age", 30, rules![min(18)]),
/// ]);
///
/// let (errors, ok) = validate(&fields);
/// assert!(!ok);
/// assert_eq!(errors.get("email"), Some("Invalid format"));
/// assert!(!errors.contains("age"));
/// ```
pub fn validate(fields: &FieldSet) -> (ErrorMap, bool) {
    Validator::new().validate(fields).into_parts()
}

// ============================================================================
// REPORT
// ============================================================================

/// Outcome of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    errors: ErrorMap,
}

impl Report {
    /// `true` when no field failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    #[must_use]
    pub fn into_parts(self) -> (ErrorMap, bool) {
        let valid = self.is_valid();
        (self.errors, valid)
    }

    /// Turns a failed run into an `Err` so it can be propagated with `?`.
    pub fn into_result(self) -> Result<(), ErrorMap> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
