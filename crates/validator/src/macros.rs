//! Macros for declaring rules and rule lists with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: declare a complete rule (struct + `Rule` impl + factory fn)
//! - [`rules!`]: build a boxed, ordered rule list for a field
//!
//! # Examples
//!
//! ```
//! use std::borrow::Cow;
//! use fieldguard::foundation::Value;
//! use fieldguard::{Field, rule, rules};
//! use fieldguard::rules::required;
//!
//! rule! {
//!     /// Accepts only even integers.
//!     pub Even;
//!     check(value) { matches!(value, Value::Int(i) if i % 2 == 0) }
//!     message(value, messages) { Cow::Borrowed("Must be even") }
//!     fn even();
//! }
//!
//! let field = Field::new("count", 4, rules![required(), even()]);
//! assert_eq!(field.rules.len(), 2);
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Declares a complete rule: struct definition, `Rule` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`. The rule's diagnostic name is the struct name.
///
/// `check` returns `bool`; `message` returns a `Cow<'a, str>` that may borrow
/// from the rule or from the `Messages` catalog.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// rule! {
///     pub Required;
///     check(value) { has_value(value) }
///     message(value, messages) { Cow::Borrowed(messages.mandatory_field.as_str()) }
///     fn required();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// rule! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub Min { limit: i64 };
///     check(self, value) { ... }
///     message(self, value, messages) { Cow::Owned(messages.min_value(self.limit)) }
///     fn min(limit: i64);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// rule! {
///     pub OneOf { allowed: Vec<Value> };
///     check(self, value) { self.allowed.contains(value) }
///     message(self, value, messages) { ... }
///     new(values: impl IntoIterator<Item = impl Into<Value>>) {
///         Self { allowed: values.into_iter().map(Into::into).collect() }
///     }
///     fn one_of(values: impl IntoIterator<Item = impl Into<Value>>);
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Variant 1a: Unit rule (no fields) + factory fn ───────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        check($v:ident) $check:block
        message($mv:ident, $msgs:ident) $msg:block
        fn $factory:ident();
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name;
            check($v) $check
            message($mv, $msgs) $msg
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit rule (no fields), no factory ────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        check($v:ident) $check:block
        message($mv:ident, $msgs:ident) $msg:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            #[allow(unused_variables)]
            fn evaluate(&self, $v: &$crate::foundation::Value) -> bool $check

            #[allow(unused_variables)]
            fn message<'a>(
                &'a self,
                $mv: &$crate::foundation::Value,
                $msgs: &'a $crate::messages::Messages,
            ) -> ::std::borrow::Cow<'a, str> $msg

            fn name(&self) -> &str {
                stringify!($name)
            }
        }
    };

    // ── Variant 2a: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $v:ident) $check:block
        message($self2:ident, $mv:ident, $msgs:ident) $msg:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            check($self_, $v) $check
            message($self2, $mv, $msgs) $msg
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + custom new, no factory ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $v:ident) $check:block
        message($self2:ident, $mv:ident, $msgs:ident) $msg:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::rule!(@impl $name; check($self_, $v) $check message($self2, $mv, $msgs) $msg);
    };

    // ── Variant 3a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $v:ident) $check:block
        message($self2:ident, $mv:ident, $msgs:ident) $msg:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            check($self_, $v) $check
            message($self2, $mv, $msgs) $msg
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $v:ident) $check:block
        message($self2:ident, $mv:ident, $msgs:ident) $msg:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::rule!(@impl $name; check($self_, $v) $check message($self2, $mv, $msgs) $msg);
    };

    // ── Internal: Rule impl for a struct with fields ─────────────────────
    (
        @impl $name:ident;
        check($self_:ident, $v:ident) $check:block
        message($self2:ident, $mv:ident, $msgs:ident) $msg:block
    ) => {
        impl $crate::foundation::Rule for $name {
            #[allow(unused_variables)]
            fn evaluate(&$self_, $v: &$crate::foundation::Value) -> bool $check

            #[allow(unused_variables)]
            fn message<'a>(
                &'a $self2,
                $mv: &$crate::foundation::Value,
                $msgs: &'a $crate::messages::Messages,
            ) -> ::std::borrow::Cow<'a, str> $msg

            fn name(&self) -> &str {
                stringify!($name)
            }
        }
    };
}

// ============================================================================
// RULES MACRO
// ============================================================================

/// Builds an ordered [`Rules`](crate::foundation::Rules) list, boxing each rule.
///
/// ```rust,ignore
/// let rules = rules![required(), email(), max(128)];
/// ```
#[macro_export]
macro_rules! rules {
    () => {
        ::std::vec::Vec::<::std::boxed::Box<dyn $crate::foundation::Rule>>::new()
    };
    ($($rule:expr),+ $(,)?) => {
        ::std::vec![
            $(::std::boxed::Box::new($rule) as ::std::boxed::Box<dyn $crate::foundation::Rule>),+
        ]
    };
}

// ============================================================================
// TESTS
// ============================================================================
