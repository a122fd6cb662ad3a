//! Date comparison rules.
//!
//! Every rule here holds a reference instant and expects a `DateTime` value;
//! any other variant fails. Comparisons are on the instant, so offsets do not
//! matter. [`MaxDaysRange`] is the exception: it counts calendar days, each
//! side in its own offset.

use std::borrow::Cow;

use crate::foundation::{Timestamp, Value, days_between};

fn compare(value: &Value, check: impl FnOnce(&Timestamp) -> bool) -> bool {
    value.as_datetime().is_some_and(check)
}

crate::rule! {
    /// Strictly after `reference`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub After { reference: Timestamp };
    check(self, value) { compare(value, |dt| *dt > self.reference) }
    message(self, value, messages) { Cow::Borrowed(messages.illogical_dates.as_str()) }
    fn after(reference: Timestamp);
}

crate::rule! {
    /// Strictly before `reference`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Before { reference: Timestamp };
    check(self, value) { compare(value, |dt| *dt < self.reference) }
    message(self, value, messages) { Cow::Borrowed(messages.illogical_dates.as_str()) }
    fn before(reference: Timestamp);
}

crate::rule! {
    /// At or before `reference`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub NotAfter { reference: Timestamp };
    check(self, value) { compare(value, |dt| *dt <= self.reference) }
    message(self, value, messages) { Cow::Borrowed(messages.illogical_dates.as_str()) }
    fn not_after(reference: Timestamp);
}

crate::rule! {
    /// At or after `reference`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub NotBefore { reference: Timestamp };
    check(self, value) { compare(value, |dt| *dt >= self.reference) }
    message(self, value, messages) { Cow::Borrowed(messages.illogical_dates.as_str()) }
    fn not_before(reference: Timestamp);
}

crate::rule! {
    /// No more than `max_days` calendar days away from `reference`, in
    /// either direction.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxDaysRange { reference: Timestamp, max_days: i64 };
    check(self, value) { compare(value, |dt| days_between(&self.reference, dt) <= self.max_days) }
    message(self, value, messages) { Cow::Owned(messages.range_too_long(self.max_days)) }
    fn max_days_range(reference: Timestamp, max_days: i64);
}
