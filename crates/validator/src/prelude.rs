//! Prelude module for convenient imports.
//!
//! `use fieldguard::prelude::*;` brings in the value type, the rule traits,
//! fields, the validator, every catalog rule and the `rule!` / `rules!`
//! macros.
//!
//! # Examples
//!
//! ```
//! use fieldguard::prelude::*;
//!
//! let field = Field::new("age", 17, rules![required(), min(18)]);
//! let (errors, _) = validate(&FieldSet::from(vec![field]));
//! assert_eq!(errors.get("age"), Some("Minimum value: 18"));
//! ```

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{
    Rule, RuleExt, Rules, Timestamp, Value, all_have_value, all_unique, days_between, has_value,
    is_strong_secret,
};

// ============================================================================
// FIELDS AND VALIDATION
// ============================================================================

pub use crate::field::{Field, FieldSet};
pub use crate::messages::Messages;
pub use crate::validator::{Report, Validator, validate};
pub use crate::{ErrorMap, rule, rules};

// ============================================================================
// RULES
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::rules::*;

pub use crate::combinators::WithMessage;
