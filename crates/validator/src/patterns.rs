//! Built-in pattern catalog.
//!
//! Patterns are compiled once, on first use, and shared process-wide. The
//! format rules in [`rules::format`](crate::rules::format) are built on these;
//! they are public so callers can compose them with
//! [`matches`](crate::rules::matches) and [`matches_list`](crate::rules::matches_list).
//!
//! ```
//! use fieldguard::patterns;
//! use fieldguard::prelude::*;
//!
//! let rule = matches([&*patterns::ADDRESS_NUMBER]);
//! assert!(rule.evaluate(&Value::from("s/n")));
//! assert!(rule.evaluate(&Value::from("231")));
//! assert!(!rule.evaluate(&Value::from("321 Fundos")));
//! ```
//!
//! `EMAIL` and `PHONE` search anywhere in the input; the others are anchored.

use std::sync::LazyLock;

use regex::Regex;

/// Accepts anything.
pub static WHATEVER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r".*").unwrap());

pub static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^@ \t\r\n]+@[^@ \t\r\n]+\.[^@ \t\r\n]+").unwrap());

/// Brazilian phone number, with or without country code, area-code
/// parentheses, dash and whitespace.
pub static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:(?:\+|00)?(55)\s?)?(?:\(?([1-9][0-9])\)?\s?)(?:((?:9\d|[2-9])\d{3})-?(\d{4}))")
        .unwrap()
});

/// CPF (individual taxpayer id), with or without `.` and `-`.
pub static CPF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}.?\d{3}.?\d{3}-?\d{2}$").unwrap());

/// CNPJ (company taxpayer id), with or without `.`, `/` and `-`.
pub static CNPJ: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2}.?\d{3}.?\d{3}/?\d{4}-?\d{2})$").unwrap());

/// CEP (postal code), with or without the dash.
pub static POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^\d{5})-?(\d{3}$)").unwrap());

/// Street number: digits, or "no number" written as `s/n` in any case.
pub static ADDRESS_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:s/n|S/n|S/N|s/N)|^(\d)*$").unwrap());

/// Textual UUID, versions 1, 4, 5 and 7 with an RFC 4122 variant nibble.
pub static UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-(1|4|5|7)[a-fA-F0-9]{3}-[89abAB][a-fA-F0-9]{3}-[a-fA-F0-9]{12}$",
    )
    .unwrap()
});
