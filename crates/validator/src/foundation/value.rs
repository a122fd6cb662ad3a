//! The dynamically-typed field value.
//!
//! Every rule receives a [`Value`] and matches on it exhaustively. A variant
//! the rule does not expect falls through to an explicit default arm and the
//! rule reports the value as invalid.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, FixedOffset, Local, Utc};

/// A point in time that keeps the offset it was recorded in.
///
/// Day arithmetic truncates to midnight in the value's own offset, so the
/// offset is part of the value rather than normalised away.
pub type Timestamp = DateTime<FixedOffset>;

/// A field value as seen by the rule catalog.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// No value at all.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    DateTime(Timestamp),
    List(Vec<Value>),
    /// A value of a type the catalog does not understand.
    ///
    /// Only a debug rendering is kept; every catalog rule treats it as invalid
    /// and [`has_value`](crate::foundation::has_value) treats it as absent.
    Other(String),
}

impl Value {
    /// Short type label used in logs and diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::DateTime(_) => "datetime",
            Self::List(_) => "list",
            Self::Other(_) => "other",
        }
    }

    /// Returns `true` for `Int` and `Float`.
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub const fn as_datetime(&self) -> Option<&Timestamp> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Wraps an arbitrary value the catalog has no variant for.
    pub fn other(value: &impl fmt::Debug) -> Self {
        Self::Other(format!("{value:?}"))
    }
}

// ============================================================================
// EQUALITY AND HASHING
// ============================================================================

/// Bit pattern used for float equality and hashing.
///
/// Both zeros share one pattern and every NaN shares another, which keeps
/// `Eq` reflexive and consistent with `Hash`.
fn canonical_bits(f: f64) -> u64 {
    if f == 0.0 {
        0
    } else if f.is_nan() {
        f64::NAN.to_bits()
    } else {
        f.to_bits()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Other(a), Self::Other(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(i) => i.hash(state),
            Self::Float(f) => canonical_bits(*f).hash(state),
            Self::Str(s) | Self::Other(s) => s.hash(state),
            Self::DateTime(dt) => dt.hash(state),
            Self::List(items) => items.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
            Self::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Other(repr) => write!(f, "<{repr}>"),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

macro_rules! impl_from_int {
    ($($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Self::Int(i64::from(v))
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Self::Str(v.clone())
    }
}

impl From<Timestamp> for Value {
    fn from(v: Timestamp) -> Self {
        Self::DateTime(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::DateTime(v.fixed_offset())
    }
}

impl From<DateTime<Local>> for Value {
    fn from(v: DateTime<Local>) -> Self {
        Self::DateTime(v.fixed_offset())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match v {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => n.as_f64().map_or_else(|| Self::Other(n.to_string()), Self::Float),
            },
            Json::String(s) => Self::Str(s),
            Json::Array(items) => Self::List(items.into_iter().map(Into::into).collect()),
            obj @ Json::Object(_) => Self::Other(obj.to_string()),
        }
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::List(iter.into_iter().collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_no_cross_variant_coercion() {
        assert_ne!(Value::from(1), Value::from(1.0));
        assert_ne!(Value::from("1"), Value::from(1));
        assert_eq!(Value::from(99.9), Value::from(99.9));
    }

    #[test]
    fn test_float_canonical_equality() {
        assert_eq!(Value::Float(0.0), Value::Float(-0.0));
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));

        let mut set = HashSet::new();
        assert!(set.insert(Value::Float(0.0)));
        assert!(!set.insert(Value::Float(-0.0)));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Str("x".into()));
    }

    #[test]
    fn test_utc_keeps_instant() {
        let utc = DateTime::<Utc>::from_timestamp(86_400, 0).unwrap();
        let value = Value::from(utc);
        assert_eq!(value.as_datetime().unwrap().timestamp(), 86_400);
    }

    #[test]
    fn test_from_json() {
        let value = Value::from(json!({"tags": ["a", 1, 2.5, null, true]})["tags"].clone());
        assert_eq!(
            value,
            Value::List(vec![
                Value::from("a"),
                Value::Int(1),
                Value::Float(2.5),
                Value::Null,
                Value::Bool(true),
            ])
        );
        assert_eq!(Value::from(json!({"a": 1})).kind(), "other");
    }

    #[test]
    fn test_display() {
        let list = Value::from(vec!["a", "b"]);
        assert_eq!(list.to_string(), "[a, b]");
        assert_eq!(Value::from("two words").to_string(), "two words");
        assert_eq!(Value::Null.to_string(), "null");
    }
}
