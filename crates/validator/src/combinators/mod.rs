//! Rule combinators
//!
//! Wrappers that change one aspect of a rule while forwarding the rest.

pub mod message;

pub use message::{WithMessage, with_message};
