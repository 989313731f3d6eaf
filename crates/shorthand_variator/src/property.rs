use std::fmt;

/// Whether a decoded longhand holds one value, or one value per layer of a
/// layered shorthand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueType {
  Simple,
  /// Produced per layer; accumulated across layers into a nested list.
  List,
}

/// The semantic kind of a longhand value (e.g. `border-style: solid`).
///
/// Every kind belongs to a [`Property::Class`], which is what a variant is
/// bound to. A class is able to produce the canonical `inherit` kind, and the
/// marker kind stating that the longhand's value is a nested per-layer list.
pub trait Property: Clone + fmt::Debug + PartialEq {
  type Class: Copy + fmt::Debug + PartialEq;

  fn class(&self) -> Self::Class;

  fn value_type(&self) -> ValueType;

  /// The `inherit` kind of `class`, or `None` when the class has no such
  /// value. Variant tables refuse to be built over such classes.
  fn inherit(class: Self::Class) -> Option<Self>;

  fn nested_list(class: Self::Class) -> Self;
}
