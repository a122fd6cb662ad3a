//! Presence rules
//!
//! `Required` and friends are the only catalog rules that reject an empty
//! string. Format rules pass it through, so a mandatory formatted field is
//! written as `rules![required(), email()]`.

use std::borrow::Cow;

use crate::foundation::{Value, has_value};

crate::rule! {
    /// The field must have a value in the [`has_value`] sense.
    ///
    /// A boolean field is present only when `true`; use [`IsFalse`] to demand
    /// `false` explicitly.
    pub Required;
    check(value) { has_value(value) }
    message(value, messages) { Cow::Borrowed(messages.mandatory_field.as_str()) }
    fn required();
}

crate::rule! {
    /// The field must be the boolean `true`.
    pub IsTrue;
    check(value) { matches!(value, Value::Bool(true)) }
    message(value, messages) { Cow::Borrowed(messages.mandatory_field.as_str()) }
    fn is_true();
}

crate::rule! {
    /// The field must be the boolean `false`.
    pub IsFalse;
    check(value) { matches!(value, Value::Bool(false)) }
    message(value, messages) { Cow::Borrowed(messages.mandatory_field.as_str()) }
    fn is_false();
}

crate::rule! {
    /// The field is required unless at least one of `others` has a value.
    ///
    /// To require the field unless *all* of a group are present, fold the
    /// group into one boolean first:
    ///
    /// ```
    /// use fieldguard::prelude::*;
    ///
    /// let address = [Value::from("Main St"), Value::from("15"), Value::from("")];
    /// let rule = required_unless([all_have_value(&address)]);
    ///
    /// // The address is incomplete, so the field itself must be filled in.
    /// assert!(!rule.evaluate(&Value::from("")));
    /// assert!(rule.evaluate(&Value::from("123.456.789")));
    /// ```
    pub RequiredUnless { others: Vec<Value> };
    check(self, value) { has_value(value) || self.others.iter().any(has_value) }
    message(self, value, messages) { Cow::Borrowed(messages.mandatory_field.as_str()) }
    new(others: impl IntoIterator<Item = impl Into<Value>>) {
        Self { others: others.into_iter().map(Into::into).collect() }
    }
    fn required_unless(others: impl IntoIterator<Item = impl Into<Value>>);
}
