//! Built-in message catalog.
//!
//! Every catalog rule draws its default message from a [`Messages`] value
//! owned by the [`Validator`](crate::Validator). Swapping the catalog is how
//! callers translate or reword messages without touching rules; a single
//! rule's message is replaced with [`RuleExt::with_message`](crate::foundation::RuleExt::with_message).
//!
//! Bound and range messages are templates. `{limit}` is replaced by the
//! bound of [`Min`](crate::rules::Min) / [`Max`](crate::rules::Max) and
//! `{days}` by the maximum of [`MaxDaysRange`](crate::rules::MaxDaysRange).
//!
//! # Loading a catalog
//!
//! ```
//! use fieldguard::Messages;
//!
//! let messages = Messages::from_json(r#"{
//!     "mandatory_field": "Campo obrigatório",
//!     "min_chars": "Mínimo de {limit} caracteres"
//! }"#)?;
//!
//! assert_eq!(messages.mandatory_field, "Campo obrigatório");
//! assert_eq!(messages.min_chars(3), "Mínimo de 3 caracteres");
//! // Keys the document does not name keep their defaults.
//! assert_eq!(messages.invalid_format, "Invalid format");
//! # Ok::<(), fieldguard::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::foundation::{Error, Result};

const LIMIT: &str = "{limit}";
const DAYS: &str = "{days}";

/// Default message texts and templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Presence rules: `Required`, `IsTrue`, `IsFalse`, `RequiredUnless`.
    pub mandatory_field: String,
    /// Format and pattern rules.
    pub invalid_format: String,
    pub weak_password: String,
    /// `OneOf` / `NotOneOf`.
    pub unacceptable_value: String,
    /// `After` / `Before` / `NotAfter` / `NotBefore`.
    pub illogical_dates: String,
    pub unique_list: String,
    pub min_value: String,
    pub min_chars: String,
    pub max_value: String,
    pub max_chars: String,
    pub range_too_long: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            mandatory_field: "This field is required".into(),
            invalid_format: "Invalid format".into(),
            weak_password: "Password is too weak".into(),
            unacceptable_value: "Unacceptable value".into(),
            illogical_dates: "Start date must be before end date".into(),
            unique_list: "List values must be unique".into(),
            min_value: "Minimum value: {limit}".into(),
            min_chars: "Minimum of {limit} characters".into(),
            max_value: "Maximum value: {limit}".into(),
            max_chars: "Maximum of {limit} characters".into(),
            range_too_long: "Period cannot be longer than {days} days".into(),
        }
    }
}

impl Messages {
    /// Parses a (possibly partial) JSON catalog over the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let messages: Self = serde_json::from_str(json)?;
        messages.check_templates().inspect_err(|e| {
            tracing::warn!(error = %e, "rejecting message catalog");
        })?;
        Ok(messages)
    }

    /// Verifies every template still carries its placeholder.
    pub fn check_templates(&self) -> Result<()> {
        let templates = [
            ("min_value", &self.min_value, LIMIT),
            ("min_chars", &self.min_chars, LIMIT),
            ("max_value", &self.max_value, LIMIT),
            ("max_chars", &self.max_chars, LIMIT),
            ("range_too_long", &self.range_too_long, DAYS),
        ];

        for (key, template, placeholder) in templates {
            if !template.contains(placeholder) {
                return Err(Error::MissingPlaceholder { key, placeholder });
            }
        }
        Ok(())
    }

    pub fn min_value(&self, limit: i64) -> String {
        self.min_value.replace(LIMIT, &limit.to_string())
    }

    pub fn min_chars(&self, limit: i64) -> String {
        self.min_chars.replace(LIMIT, &limit.to_string())
    }

    pub fn max_value(&self, limit: i64) -> String {
        self.max_value.replace(LIMIT, &limit.to_string())
    }

    pub fn max_chars(&self, limit: i64) -> String {
        self.max_chars.replace(LIMIT, &limit.to_string())
    }

    pub fn range_too_long(&self, days: i64) -> String {
        self.range_too_long.replace(DAYS, &days.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_templates_render() {
        let messages = Messages::default();
        assert_eq!(messages.min_value(18), "Minimum value: 18");
        assert_eq!(messages.max_chars(128), "Maximum of 128 characters");
        assert_eq!(messages.range_too_long(365), "Period cannot be longer than 365 days");
        assert!(messages.check_templates().is_ok());
    }

    #[test]
    fn test_partial_catalog_keeps_defaults() {
        let messages = Messages::from_json(r#"{"weak_password": "Too weak"}"#).unwrap();
        assert_eq!(messages.weak_password, "Too weak");
        assert_eq!(messages.unique_list, Messages::default().unique_list);
    }

    #[test]
    fn test_missing_placeholder_rejected() {
        let err = Messages::from_json(r#"{"max_value": "Too big"}"#).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingPlaceholder { key: "max_value", placeholder: "{limit}" }
        ));
    }

    #[test]
    fn test_malformed_catalog_rejected() {
        let err = Messages::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::InvalidCatalog(_)));
    }
}
