//! # fieldguard
//!
//! Declarative validation of named, dynamically-typed field values against
//! ordered lists of rules, reporting the first failure per field.
//!
//! ## Quick Start
//!
//! ```
//! use fieldguard::prelude::*;
//!
//! let fields = FieldSet::from(vec![
//!     Field::new("name", "Ana", rules![required(), max(64)]),
//!     Field::new("email", "qqq@aaa", rules![required(), email()]),
//!     Field::new("password", "password", rules![required(), strong_password()]),
//! ]);
//!
//! let (errors, ok) = validate(&fields);
//! assert!(!ok);
//! assert_eq!(errors.get("email"), Some("Invalid format"));
//! assert_eq!(errors.get("password"), Some("Password is too weak"));
//! assert!(!errors.contains("name"));
//! ```
//!
//! ## Writing Rules
//!
//! Use the [`rule!`] macro for catalog-style rules, or implement
//! [`Rule`](foundation::Rule) by hand. Any rule's message can be replaced
//! with [`RuleExt::with_message`](foundation::RuleExt::with_message).
//!
//! ## Built-in Rules
//!
//! - **Presence**: [`Required`](rules::Required), [`IsTrue`](rules::IsTrue),
//!   [`IsFalse`](rules::IsFalse), [`RequiredUnless`](rules::RequiredUnless)
//! - **Format**: [`Email`](rules::Email), [`Phone`](rules::Phone),
//!   [`Cpf`](rules::Cpf), [`Cnpj`](rules::Cnpj), [`PostalCode`](rules::PostalCode),
//!   [`UuidString`](rules::UuidString), [`StrongPassword`](rules::StrongPassword),
//!   [`Matches`](rules::Matches), [`MatchesList`](rules::MatchesList)
//! - **Bounds**: [`Min`](rules::Min), [`Max`](rules::Max)
//! - **Membership**: [`OneOf`](rules::OneOf), [`NotOneOf`](rules::NotOneOf),
//!   [`UniqueList`](rules::UniqueList)
//! - **Dates**: [`After`](rules::After), [`Before`](rules::Before),
//!   [`NotAfter`](rules::NotAfter), [`NotBefore`](rules::NotBefore),
//!   [`MaxDaysRange`](rules::MaxDaysRange)
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and installs no subscriber. Rule
//! evaluations are logged at `TRACE`, failures and run summaries at `DEBUG`.

pub mod combinators;
pub mod field;
pub mod foundation;
mod macros;
pub mod messages;
pub mod patterns;
pub mod prelude;
pub mod rules;
pub mod validator;

pub use field::{Field, FieldSet};
pub use foundation::{Error, ErrorMap, Result};
pub use messages::Messages;
pub use validator::{Report, Validator, validate};
