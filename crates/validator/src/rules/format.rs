//! Format rules
//!
//! Every rule here expects a string. An empty string passes (presence is
//! [`Required`](crate::rules::Required)'s job) and any other type fails.

use std::borrow::{Borrow, Cow};

use regex::Regex;

use crate::foundation::{Error, Result, Value, is_strong_secret};
use crate::patterns;

/// Runs `check` on a non-empty string; empty strings pass, other types fail.
fn non_empty_str(value: &Value, check: impl FnOnce(&str) -> bool) -> bool {
    match value {
        Value::Str(s) if s.is_empty() => true,
        Value::Str(s) => check(s),
        _ => false,
    }
}

fn collect_patterns<P: Borrow<Regex>>(patterns: impl IntoIterator<Item = P>) -> Vec<Regex> {
    patterns
        .into_iter()
        .map(|p| {
            let p: &Regex = p.borrow();
            p.clone()
        })
        .collect()
}

fn compile_all(patterns: &[&str]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).map_err(|e| Error::invalid_pattern(*p, e)))
        .collect()
}

// ============================================================================
// FIXED FORMATS
// ============================================================================

crate::rule! {
    /// Validates email format against [`patterns::EMAIL`].
    pub Email;
    check(value) { non_empty_str(value, |s| patterns::EMAIL.is_match(s)) }
    message(value, messages) { Cow::Borrowed(messages.invalid_format.as_str()) }
    fn email();
}

crate::rule! {
    /// Validates phone numbers against [`patterns::PHONE`].
    pub Phone;
    check(value) { non_empty_str(value, |s| patterns::PHONE.is_match(s)) }
    message(value, messages) { Cow::Borrowed(messages.invalid_format.as_str()) }
    fn phone();
}

crate::rule! {
    pub Cpf;
    check(value) { non_empty_str(value, |s| patterns::CPF.is_match(s)) }
    message(value, messages) { Cow::Borrowed(messages.invalid_format.as_str()) }
    fn cpf();
}

crate::rule! {
    pub Cnpj;
    check(value) { non_empty_str(value, |s| patterns::CNPJ.is_match(s)) }
    message(value, messages) { Cow::Borrowed(messages.invalid_format.as_str()) }
    fn cnpj();
}

crate::rule! {
    /// Accepts either a CPF or a CNPJ.
    pub CpfCnpj;
    check(value) {
        non_empty_str(value, |s| patterns::CPF.is_match(s) || patterns::CNPJ.is_match(s))
    }
    message(value, messages) { Cow::Borrowed(messages.invalid_format.as_str()) }
    fn cpf_cnpj();
}

crate::rule! {
    /// Validates postal codes against [`patterns::POSTAL_CODE`].
    pub PostalCode;
    check(value) { non_empty_str(value, |s| patterns::POSTAL_CODE.is_match(s)) }
    message(value, messages) { Cow::Borrowed(messages.invalid_format.as_str()) }
    fn postal_code();
}

crate::rule! {
    /// Validates textual UUIDs (versions 1, 4, 5 and 7).
    pub UuidString;
    check(value) { non_empty_str(value, |s| patterns::UUID.is_match(s)) }
    message(value, messages) { Cow::Borrowed(messages.invalid_format.as_str()) }
    fn uuid_string();
}

// ============================================================================
// STRONG PASSWORD
// ============================================================================

crate::rule! {
    /// Validates password strength with [`is_strong_secret`].
    #[derive(Copy, PartialEq, Eq, Hash, Default)]
    pub StrongPassword { max_chars: Option<usize> };
    check(self, value) { non_empty_str(value, |s| is_strong_secret(s, self.max_chars)) }
    message(self, value, messages) { Cow::Borrowed(messages.weak_password.as_str()) }
    new() { Self { max_chars: None } }
    fn strong_password();
}

impl StrongPassword {
    /// Also rejects passwords longer than `max` characters.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_max_chars(mut self, max: usize) -> Self {
        self.max_chars = Some(max);
        self
    }
}

// ============================================================================
// CUSTOM PATTERNS
// ============================================================================

crate::rule! {
    /// Validates that a string matches at least one of the given patterns.
    pub Matches { patterns: Vec<Regex> };
    check(self, value) { non_empty_str(value, |s| self.patterns.iter().any(|p| p.is_match(s))) }
    message(self, value, messages) { Cow::Borrowed(messages.invalid_format.as_str()) }
    new(patterns: impl IntoIterator<Item = impl Borrow<Regex>>) {
        Self { patterns: collect_patterns(patterns) }
    }
    fn matches(patterns: impl IntoIterator<Item = impl Borrow<Regex>>);
}

impl Matches {
    /// Compiles caller-supplied patterns.
    pub fn try_new(patterns: &[&str]) -> Result<Self> {
        Ok(Self {
            patterns: compile_all(patterns)?,
        })
    }
}

/// Creates a [`Matches`] rule from pattern strings.
pub fn try_matches(patterns: &[&str]) -> Result<Matches> {
    Matches::try_new(patterns)
}

crate::rule! {
    /// Validates that every string in a list matches every given pattern.
    ///
    /// An absent value (`Null`) or an empty list passes. Any element that is
    /// not a string fails the whole list.
    pub MatchesList { patterns: Vec<Regex> };
    check(self, value) {
        match value {
            Value::Null => true,
            Value::List(items) => items.iter().all(|item| match item {
                Value::Str(s) => self.patterns.iter().all(|p| p.is_match(s)),
                _ => false,
            }),
            _ => false,
        }
    }
    message(self, value, messages) { Cow::Borrowed(messages.invalid_format.as_str()) }
    new(patterns: impl IntoIterator<Item = impl Borrow<Regex>>) {
        Self { patterns: collect_patterns(patterns) }
    }
    fn matches_list(patterns: impl IntoIterator<Item = impl Borrow<Regex>>);
}

impl MatchesList {
    /// Compiles caller-supplied patterns.
    pub fn try_new(patterns: &[&str]) -> Result<Self> {
        Ok(Self {
            patterns: compile_all(patterns)?,
        })
    }
}

/// Creates a [`MatchesList`] rule from pattern strings.
pub fn try_matches_list(patterns: &[&str]) -> Result<MatchesList> {
    MatchesList::try_new(patterns)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;

    #[test]
    fn test_empty_string_passes() {
        let empty = Value::from("");
        assert!(email().evaluate(&empty));
        assert!(phone().evaluate(&empty));
        assert!(cpf_cnpj().evaluate(&empty));
        assert!(postal_code().evaluate(&empty));
        assert!(uuid_string().evaluate(&empty));
        assert!(strong_password().evaluate(&empty));
    }

    #[test]
    fn test_wrong_type_fails() {
        assert!(!email().evaluate(&Value::from(0)));
        assert!(!cpf().evaluate(&Value::Null));
        assert!(!matches([&*patterns::WHATEVER]).evaluate(&Value::from(1)));
    }

    #[test]
    fn test_cpf_cnpj_accepts_either() {
        let rule = cpf_cnpj();
        assert!(rule.evaluate(&Value::from("139.503.176-27")));
        assert!(rule.evaluate(&Value::from("44504044000124")));
        assert!(!rule.evaluate(&Value::from("44504044000127272")));
    }

    #[test]
    fn test_strong_password_max_chars() {
        let rule = strong_password().with_max_chars(10);
        assert!(rule.evaluate(&Value::from("$s3NH@!X")));
        assert!(!rule.evaluate(&Value::from("$S3nh4Mu1iT0__F)rt3!")));
    }

    #[test]
    fn test_matches_any_pattern() {
        let rule = matches([&*patterns::CPF, &*patterns::POSTAL_CODE]);
        assert!(rule.evaluate(&Value::from("36610-000")));
        assert!(rule.evaluate(&Value::from("13950317627")));
        assert!(!rule.evaluate(&Value::from("abc")));
    }

    #[test]
    fn test_try_matches() {
        let rule = try_matches(&[r"^\d{3}-\d{4}$"]).unwrap();
        assert!(rule.evaluate(&Value::from("123-4567")));
        assert!(!rule.evaluate(&Value::from("invalid")));

        let err = try_matches(&["("]).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { ref pattern, .. } if pattern == "("));
    }

    #[test]
    fn test_matches_list() {
        let rule = matches_list([&*patterns::ADDRESS_NUMBER]);
        assert!(rule.evaluate(&Value::Null));
        assert!(rule.evaluate(&Value::List(vec![])));
        assert!(rule.evaluate(&Value::from(vec!["231", "s/n", "S/N"])));
        assert!(!rule.evaluate(&Value::from(vec!["abc", "1 1"])));
        assert!(!rule.evaluate(&Value::from(vec![Value::from("1"), Value::from(1)])));
        assert!(!rule.evaluate(&Value::from("231")));
    }

    #[test]
    fn test_try_matches_list_requires_every_pattern() {
        let rule = try_matches_list(&[r"^\d+$", r"^.{3}$"]).unwrap();
        assert!(rule.evaluate(&Value::from(vec!["123", "456"])));
        assert!(!rule.evaluate(&Value::from(vec!["123", "4567"])));
    }
}
