//! Membership and uniqueness rules.

use std::borrow::Cow;

use crate::foundation::{Value, all_unique};

crate::rule! {
    /// Accepts only values equal to one of `allowed`.
    ///
    /// Equality is strict: `Int(1)` is not a member of `[Float(1.0)]`.
    pub OneOf { allowed: Vec<Value> };
    check(self, value) { self.allowed.contains(value) }
    message(self, value, messages) { Cow::Borrowed(messages.unacceptable_value.as_str()) }
    new(allowed: impl IntoIterator<Item = impl Into<Value>>) {
        Self { allowed: allowed.into_iter().map(Into::into).collect() }
    }
    fn one_of(allowed: impl IntoIterator<Item = impl Into<Value>>);
}

crate::rule! {
    /// Rejects values equal to one of `forbidden`.
    pub NotOneOf { forbidden: Vec<Value> };
    check(self, value) { !self.forbidden.contains(value) }
    message(self, value, messages) { Cow::Borrowed(messages.unacceptable_value.as_str()) }
    new(forbidden: impl IntoIterator<Item = impl Into<Value>>) {
        Self { forbidden: forbidden.into_iter().map(Into::into).collect() }
    }
    fn not_one_of(forbidden: impl IntoIterator<Item = impl Into<Value>>);
}

crate::rule! {
    /// Requires a list with no repeated elements. Non-lists fail.
    pub UniqueList;
    check(value) { value.as_list().is_some_and(|items| all_unique(items)) }
    message(value, messages) { Cow::Borrowed(messages.unique_list.as_str()) }
    fn unique_list();
}
