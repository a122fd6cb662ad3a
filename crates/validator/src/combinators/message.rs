//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Rule, Value};
use crate::messages::Messages;

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the failure message of a rule with a literal.
///
/// Only the message producer changes; `evaluate` and `name` are forwarded to
/// the inner rule unchanged.
///
/// # Examples
///
/// ```
/// use fieldguard::combinators::WithMessage;
/// use fieldguard::prelude::*;
///
/// let rule = WithMessage::new(min(18), "Your beard doesn't fool me!");
///
/// assert!(!rule.evaluate(&Value::from(17)));
/// assert_eq!(rule.message(&Value::from(17), &Messages::default()), "Your beard doesn't fool me!");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<R> {
    inner: R,
    message: String,
}

impl<R> WithMessage<R> {
    /// Creates a new `WithMessage` combinator with a custom message.
    pub fn new(inner: R, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message_text(&self) -> &str {
        &self.message
    }

    /// Extracts the inner rule.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Rule> Rule for WithMessage<R> {
    fn evaluate(&self, value: &Value) -> bool {
        self.inner.evaluate(value)
    }

    fn message<'a>(&'a self, _value: &Value, _messages: &'a Messages) -> Cow<'a, str> {
        Cow::Borrowed(&self.message)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Creates a `WithMessage` combinator.
pub fn with_message<R: Rule>(rule: R, message: impl Into<String>) -> WithMessage<R> {
    WithMessage::new(rule, message)
}

// ============================================================================
// TESTS
// ============================================================================
