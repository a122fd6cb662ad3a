//! Core types and traits
//!
//! - **Values**: [`Value`], [`Timestamp`]
//! - **Semantics**: [`has_value`], [`all_have_value`], [`all_unique`],
//!   [`is_strong_secret`], [`days_between`]
//! - **Traits**: [`Rule`], [`RuleExt`]
//! - **Errors**: [`Error`], [`ErrorMap`]
//!
//! Everything a rule needs to be written lives here; the catalog in
//! [`rules`](crate::rules) and any caller-defined rule build on the same
//! pieces.

mod error;
mod semantics;
mod traits;
mod value;

pub use error::{Error, ErrorMap, Result};
pub use semantics::{
    SECRET_MIN_CHARS, SECRET_SYMBOLS, all_have_value, all_unique, days_between, has_value,
    is_strong_secret,
};
pub use traits::{Rule, RuleExt, Rules};
pub use value::{Timestamp, Value};
