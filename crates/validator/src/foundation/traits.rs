//! Core traits for the validation system
//!
//! This module defines the [`Rule`] trait every catalog entry implements and
//! the [`RuleExt`] extension that adds message overrides and boxing.

use std::borrow::Cow;

use crate::combinators::WithMessage;
use crate::foundation::Value;
use crate::messages::Messages;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// A single named check: a predicate plus a message producer.
///
/// The value under test is passed to both methods rather than stored in the
/// rule, so one rule instance can be evaluated against any number of values,
/// from any number of threads.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use fieldguard::foundation::{Rule, Value};
/// use fieldguard::Messages;
///
/// struct Even;
///
/// impl Rule for Even {
///     fn evaluate(&self, value: &Value) -> bool {
///         matches!(value, Value::Int(i) if i % 2 == 0)
///     }
///
///     fn message<'a>(&'a self, _value: &Value, _messages: &'a Messages) -> Cow<'a, str> {
///         Cow::Borrowed("Must be even")
///     }
/// }
///
/// assert!(Even.evaluate(&Value::from(4)));
/// assert!(!Even.evaluate(&Value::from("4")));
/// ```
pub trait Rule: Send + Sync {
    /// Returns `true` if the value satisfies the rule.
    ///
    /// Must be total: a value of an unexpected type is reported as invalid,
    /// never as a panic.
    fn evaluate(&self, value: &Value) -> bool;

    /// Produces the failure message for a value that did not satisfy the rule.
    ///
    /// `messages` is the validator's catalog; catalog rules read their
    /// defaults from it.
    fn message<'a>(&'a self, value: &Value, messages: &'a Messages) -> Cow<'a, str>;

    /// Diagnostic label identifying the rule. Not used for pass/fail.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn evaluate(&self, value: &Value) -> bool {
        (**self).evaluate(value)
    }

    fn message<'a>(&'a self, value: &Value, messages: &'a Messages) -> Cow<'a, str> {
        (**self).message(value, messages)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<R: Rule + ?Sized> Rule for &R {
    fn evaluate(&self, value: &Value) -> bool {
        (**self).evaluate(value)
    }

    fn message<'a>(&'a self, value: &Value, messages: &'a Messages) -> Cow<'a, str> {
        (**self).message(value, messages)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// An ordered, type-erased rule list. Build one with [`rules!`](crate::rules!).
pub type Rules = Vec<Box<dyn Rule>>;

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Extension methods available on every [`Rule`].
pub trait RuleExt: Rule + Sized {
    /// Replaces the rule's message with a literal; the predicate is untouched.
    ///
    /// ```
    /// use fieldguard::prelude::*;
    ///
    /// let rule = required().with_message("Why did you leave it blank?");
    /// assert!(!rule.evaluate(&Value::from("")));
    /// assert_eq!(
    ///     rule.message(&Value::from(""), &Messages::default()),
    ///     "Why did you leave it blank?"
    /// );
    /// ```
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Erases the rule's type so it can sit in a [`Rules`] list.
    fn boxed(self) -> Box<dyn Rule>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<T: Rule> RuleExt for T {}

// ============================================================================
// TESTS
// ============================================================================
