//! Fields and ordered field sets.
//!
//! A [`Field`] binds a name and a [`Value`] to the ordered list of rules it
//! must satisfy. A [`FieldSet`] is the unit handed to the validator; its
//! order is the order fields are checked and reported in.
//!
//! The mutators on [`FieldSet`] let a caller build a template once and
//! re-parameterize it right before validating:
//!
//! ```
//! use fieldguard::prelude::*;
//!
//! let mut fields = FieldSet::from(vec![
//!     Field::new("kind", "", rules![required()]),
//!     Field::new("document", "", rules![required()]),
//! ]);
//!
//! let max_len = 14;
//! fields
//!     .set_value("kind", "company")
//!     .set_value("document", "44504044000124")
//!     .set_rules("document", rules![required(), cnpj(), max(max_len)]);
//!
//! assert!(validate(&fields).1);
//! ```

use std::fmt;

use crate::foundation::{Rule, Rules, Value};

// ============================================================================
// FIELD
// ============================================================================

/// A named value plus the rules it is checked against, in order.
pub struct Field {
    pub name: String,
    pub value: Value,
    pub rules: Rules,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<Value>, rules: Rules) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            rules,
        }
    }

    /// Appends a rule to the end of the list.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name())
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("rules", &self.rule_names().collect::<Vec<_>>())
            .finish()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ name: {}, value: {}, rules: ", self.name, self.value)?;
        for (i, name) in self.rule_names().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        f.write_str(" }")
    }
}

// ============================================================================
// FIELD SET
// ============================================================================

/// An ordered collection of fields, looked up by name.
///
/// Lookups are linear; field sets are expected to hold tens of fields.
/// Names are assumed unique: every by-name operation acts on the first match.
#[derive(Debug, Default)]
pub struct FieldSet {
    fields: Vec<Field>,
}

impl FieldSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    /// Replaces the rules of the named field. Does nothing if it is absent.
    pub fn set_rules(&mut self, name: &str, rules: Rules) -> &mut Self {
        if let Some(field) = self.get_mut(name) {
            field.rules = rules;
        }
        self
    }

    /// Replaces the value of the named field. Does nothing if it is absent.
    pub fn set_value(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        if let Some(field) = self.get_mut(name) {
            field.value = value.into();
        }
        self
    }

    /// Replaces the named field in place, or appends `field` if none matches.
    pub fn upsert_field(&mut self, name: &str, field: Field) -> &mut Self {
        match self.get_mut(name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }
}

impl From<Vec<Field>> for FieldSet {
    fn from(fields: Vec<Field>) -> Self {
        Self { fields }
    }
}

impl FromIterator<Field> for FieldSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl Extend<Field> for FieldSet {
    fn extend<I: IntoIterator<Item = Field>>(&mut self, iter: I) {
        self.fields.extend(iter);
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl IntoIterator for FieldSet {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
