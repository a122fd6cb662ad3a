//! The built-in rule catalog.
//!
//! Each rule is a small struct implementing [`Rule`](crate::foundation::Rule)
//! with a snake_case factory function of the same name. Rules are grouped by
//! what they look at:
//!
//! - [`presence`]: `required`, `is_true`, `is_false`, `required_unless`
//! - [`format`]: fixed formats plus caller patterns via `matches`
//! - [`bounds`]: `min` / `max` for numbers and string lengths
//! - [`membership`]: `one_of`, `not_one_of`, `unique_list`
//! - [`temporal`]: comparisons against a reference instant
//!
//! Apart from the presence rules, an empty string passes every rule that
//! accepts strings.

pub mod bounds;
pub mod format;
pub mod membership;
pub mod presence;
pub mod temporal;

pub use bounds::{Max, Min, max, min};
pub use format::{
    Cnpj, Cpf, CpfCnpj, Email, Matches, MatchesList, Phone, PostalCode, StrongPassword,
    UuidString, cnpj, cpf, cpf_cnpj, email, matches, matches_list, phone, postal_code,
    strong_password, try_matches, try_matches_list, uuid_string,
};
pub use membership::{NotOneOf, OneOf, UniqueList, not_one_of, one_of, unique_list};
pub use presence::{IsFalse, IsTrue, Required, RequiredUnless, is_false, is_true, required, required_unless};
pub use temporal::{
    After, Before, MaxDaysRange, NotAfter, NotBefore, after, before, max_days_range, not_after,
    not_before,
};
