use indexmap::IndexMap;

use crate::property::Property;
use crate::term::{Separator, Term, TermValue};

/// Decoded longhands: property kinds and values keyed by longhand name.
///
/// A longhand always has a kind; it has a value only when the kind alone does
/// not describe it (`border-width: 1px` has one, `border-style: solid` does not).
#[derive(Clone, Debug, PartialEq)]
pub struct Decoded<P> {
  pub properties: IndexMap<String, P>,
  pub values: IndexMap<String, Term<P>>,
}

impl<P> Default for Decoded<P> {
  fn default() -> Self {
    Decoded {
      properties: IndexMap::new(),
      values: IndexMap::new(),
    }
  }
}

impl<P: Property> Decoded<P> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_empty(&self) -> bool {
    self.properties.is_empty() && self.values.is_empty()
  }

  pub fn property(&self, name: &str) -> Option<&P> {
    self.properties.get(name)
  }

  pub fn value(&self, name: &str) -> Option<&Term<P>> {
    self.values.get(name)
  }

  /// Sets a longhand, replacing both its kind and its value.
  pub fn set(&mut self, name: impl Into<String>, property: P, value: Option<Term<P>>) {
    let name = name.into();
    match value {
      Some(value) => {
        self.values.insert(name.clone(), value);
      }
      None => {
        self.values.shift_remove(&name);
      }
    }
    self.properties.insert(name, property);
  }

  /// Sets only the kind of a longhand, leaving any value in place.
  pub fn set_property(&mut self, name: impl Into<String>, property: P) {
    self.properties.insert(name.into(), property);
  }

  /// Applies every longhand of `other` on top of this one.
  pub fn merge(&mut self, mut other: Decoded<P>) {
    for (name, property) in other.properties {
      let value = other.values.shift_remove(&name);
      self.set(name, property, value);
    }
    self.values.extend(other.values);
  }

  /// Appends `(property, value)` to the nested per-layer list stored under
  /// `name`, creating the list when the current value is absent or not a list.
  pub(crate) fn push_nested(&mut self, name: &str, property: P, value: Option<&Term<P>>) {
    let entry = self
      .values
      .entry(name.to_string())
      .or_insert_with(|| Term::list(Vec::new()));
    if entry.as_list().is_none() {
      *entry = Term::list(Vec::new());
    }

    if let TermValue::List(items) = &mut entry.value {
      let mut pair = Term::property_value(property, value.map(Term::without_separator));
      if !items.is_empty() {
        pair.set_separator(Some(Separator::Comma));
      }
      items.push(pair);
    }
  }
}
