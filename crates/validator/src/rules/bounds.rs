//! Numeric and length bounds.
//!
//! [`Min`] and [`Max`] do double duty: on numbers they bound the value, on
//! strings they bound the length in characters. An empty string passes
//! either bound.

use std::borrow::Cow;

use crate::foundation::Value;

/// Measures a value against a bound; `None` means the value has no measure.
fn measure(value: &Value, limit: i64) -> Option<std::cmp::Ordering> {
    match value {
        Value::Int(n) => Some(n.cmp(&limit)),
        Value::Float(f) => f.partial_cmp(&(limit as f64)),
        Value::Str(s) => {
            let chars = i64::try_from(s.chars().count()).unwrap_or(i64::MAX);
            Some(chars.cmp(&limit))
        }
        _ => None,
    }
}

fn is_empty_str(value: &Value) -> bool {
    matches!(value, Value::Str(s) if s.is_empty())
}

crate::rule! {
    /// Lower bound: value `>= limit`, or at least `limit` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min { limit: i64 };
    check(self, value) {
        is_empty_str(value) || measure(value, self.limit).is_some_and(std::cmp::Ordering::is_ge)
    }
    message(self, value, messages) {
        if value.is_numeric() {
            Cow::Owned(messages.min_value(self.limit))
        } else {
            Cow::Owned(messages.min_chars(self.limit))
        }
    }
    fn min(limit: i64);
}

crate::rule! {
    /// Upper bound: value `<= limit`, or at most `limit` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max { limit: i64 };
    check(self, value) {
        is_empty_str(value) || measure(value, self.limit).is_some_and(std::cmp::Ordering::is_le)
    }
    message(self, value, messages) {
        if value.is_numeric() {
            Cow::Owned(messages.max_value(self.limit))
        } else {
            Cow::Owned(messages.max_chars(self.limit))
        }
    }
    fn max(limit: i64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;
    use crate::messages::Messages;

    #[test]
    fn test_min_numbers() {
        let rule = min(18);
        assert!(rule.evaluate(&Value::from(18)));
        assert!(!rule.evaluate(&Value::from(17)));
        assert!(rule.evaluate(&Value::from(18.0)));
        assert!(!rule.evaluate(&Value::from(17.9)));
    }

    #[test]
    fn test_max_string_length_counts_chars() {
        let rule = max(3);
        assert!(rule.evaluate(&Value::from("ãéí")));
        assert!(!rule.evaluate(&Value::from("abcd")));
        assert!(rule.evaluate(&Value::from("")));
    }

    #[test]
    fn test_nan_fails_both_bounds() {
        assert!(!min(0).evaluate(&Value::from(f64::NAN)));
        assert!(!max(0).evaluate(&Value::from(f64::NAN)));
    }

    #[test]
    fn test_other_types_fail() {
        assert!(!min(0).evaluate(&Value::Null));
        assert!(!max(10).evaluate(&Value::from(true)));
        assert!(!max(10).evaluate(&Value::from(vec![1, 2])));
    }

    #[test]
    fn test_message_depends_on_value_kind() {
        let messages = Messages::default();
        assert_eq!(min(18).message(&Value::from(3), &messages), "Minimum value: 18");
        assert_eq!(min(8).message(&Value::from("abc"), &messages), "Minimum of 8 characters");
        assert_eq!(max(5).message(&Value::from(5.5), &messages), "Maximum value: 5");
        assert_eq!(max(2).message(&Value::from("abc"), &messages), "Maximum of 2 characters");
    }
}
