//! Presence, uniqueness, secret-strength and date helpers.
//!
//! These are the pure building blocks the rule catalog is written on top of.
//! They are public so callers can fold several related values into one
//! condition, e.g. passing `all_have_value(...)` to
//! [`required_unless`](crate::rules::required_unless).

use std::collections::HashSet;
use std::hash::Hash;

use crate::foundation::{Timestamp, Value};

/// Symbols that count towards a strong secret.
pub const SECRET_SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Minimum number of characters in a strong secret.
pub const SECRET_MIN_CHARS: usize = 8;

/// Reports whether a value counts as present.
///
/// - `Bool`: only `true`.
/// - `Str`: at least one character.
/// - `Int` / `Float`: anything but zero.
/// - `DateTime`: anything but the zero instant (`Timestamp::default()`).
/// - everything else (`Null`, `List`, `Other`): never.
pub fn has_value(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Str(s) => !s.is_empty(),
        Value::Int(i) => *i != 0,
        Value::Float(f) => *f != 0.0,
        Value::DateTime(dt) => *dt != Timestamp::default(),
        Value::Null | Value::List(_) | Value::Other(_) => false,
    }
}

/// Returns `true` only if every value is present.
///
/// ```
/// use fieldguard::foundation::{all_have_value, Value};
///
/// let full = all_have_value(&[Value::from("Main St"), Value::from(15)]);
/// let partial = all_have_value(&[Value::from("Main St"), Value::from("")]);
/// assert!(full);
/// assert!(!partial);
/// ```
pub fn all_have_value<'a>(values: impl IntoIterator<Item = &'a Value>) -> bool {
    values.into_iter().all(has_value)
}

/// Returns `false` as soon as an item repeats any earlier item.
pub fn all_unique<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    items.into_iter().all(|item| seen.insert(item))
}

/// Reports whether `secret` is strong enough.
///
/// Strong means at least [`SECRET_MIN_CHARS`] characters (and at most
/// `max_chars` when given) with an uppercase letter, a lowercase letter, a
/// digit and one of [`SECRET_SYMBOLS`].
pub fn is_strong_secret(secret: &str, max_chars: Option<usize>) -> bool {
    let chars = secret.chars().count();
    if chars < SECRET_MIN_CHARS || max_chars.is_some_and(|max| chars > max) {
        return false;
    }

    let (mut upper, mut lower, mut digit, mut symbol) = (false, false, false, false);
    for c in secret.chars() {
        upper |= c.is_uppercase();
        lower |= c.is_lowercase();
        digit |= c.is_ascii_digit();
        symbol |= SECRET_SYMBOLS.contains(c);
    }

    upper && lower && digit && symbol
}

/// Whole calendar days between two timestamps, ignoring the time of day.
///
/// Each timestamp is truncated to midnight in its own offset before the
/// difference is taken; the result does not depend on argument order.
pub fn days_between(a: &Timestamp, b: &Timestamp) -> i64 {
    (a.date_naive() - b.date_naive()).num_days().abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn at(offset_hours: i32, y: i32, m: u32, d: u32, h: u32) -> Timestamp {
        FixedOffset::east_opt(offset_hours * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_has_value_scalars() {
        assert!(!has_value(&Value::from("")));
        assert!(has_value(&Value::from(" ")));
        assert!(!has_value(&Value::from(0)));
        assert!(has_value(&Value::from(-1)));
        assert!(!has_value(&Value::from(0.0)));
        assert!(!has_value(&Value::from(false)));
        assert!(has_value(&Value::from(true)));
    }

    #[test]
    fn test_has_value_unrecognised() {
        assert!(!has_value(&Value::Null));
        assert!(!has_value(&Value::from(vec![1, 2])));
        assert!(!has_value(&Value::other(&())));
    }

    #[test]
    fn test_has_value_datetime() {
        assert!(!has_value(&Value::DateTime(Timestamp::default())));
        assert!(has_value(&Value::DateTime(at(0, 2024, 1, 1, 0))));
    }

    #[test]
    fn test_all_unique() {
        assert!(all_unique(Vec::<i32>::new()));
        assert!(all_unique([1, 2, 3]));
        assert!(!all_unique([1, 2, 2]));
        // Non-adjacent repeats count too.
        assert!(!all_unique(["a", "b", "a"]));
    }

    #[test]
    fn test_strong_secret() {
        assert!(is_strong_secret("$s3NH@!X", None));
        assert!(!is_strong_secret("password", None));
        assert!(!is_strong_secret("$3nH4!!", None));
        assert!(!is_strong_secret("qAz QwE 1Z2b9j", None));
        assert!(!is_strong_secret("$s3NH@!Xabc", Some(10)));
    }

    #[test]
    fn test_days_between_ignores_time_of_day() {
        let morning = at(0, 2024, 3, 1, 0);
        let late = at(0, 2024, 3, 3, 23);
        assert_eq!(days_between(&morning, &late), 2);
        assert_eq!(days_between(&late, &morning), 2);
    }

    #[test]
    fn test_days_between_uses_own_offset() {
        // 2024-03-02 01:00 at +03:00 is still 2024-03-01 in UTC.
        let east = at(3, 2024, 3, 2, 1);
        let utc = at(0, 2024, 3, 1, 12);
        assert_eq!(days_between(&east, &utc), 1);
    }
}
