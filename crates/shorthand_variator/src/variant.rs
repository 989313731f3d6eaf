use crate::error::VariatorError;
use crate::property::Property;

/// One sub-grammar slot of a shorthand, bound to a longhand and its class.
#[derive(Clone, Debug, PartialEq)]
pub struct Variant<P: Property> {
  pub name: String,
  pub class: P::Class,
  inherit: P,
}

impl<P: Property> Variant<P> {
  /// The `inherit` kind of this variant's class.
  pub fn inherit(&self) -> &P {
    &self.inherit
  }
}

/// The immutable variant configuration of a shorthand.
///
/// ```
/// # use shorthand_variator::{Property, ValueType, VariantTable};
/// # #[derive(Clone, Debug, PartialEq)]
/// # struct Kind(&'static str, bool);
/// # impl Property for Kind {
/// #   type Class = &'static str;
/// #   fn class(&self) -> &'static str { self.0 }
/// #   fn value_type(&self) -> ValueType { ValueType::Simple }
/// #   fn inherit(class: &'static str) -> Option<Self> { Some(Kind(class, true)) }
/// #   fn nested_list(class: &'static str) -> Self { Kind(class, false) }
/// # }
/// let table = VariantTable::<Kind>::builder()
///   .variant("border-width", "width")
///   .variant("border-style", "style")
///   .variant("border-color", "color")
///   .build()
///   .unwrap();
///
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.position("border-style"), Some(1));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct VariantTable<P: Property> {
  variants: Vec<Variant<P>>,
}

impl<P: Property> VariantTable<P> {
  pub fn builder() -> VariantTableBuilder<P> {
    VariantTableBuilder {
      variants: Vec::new(),
    }
  }

  pub fn len(&self) -> usize {
    self.variants.len()
  }

  pub fn is_empty(&self) -> bool {
    self.variants.is_empty()
  }

  pub fn get(&self, variant: usize) -> Option<&Variant<P>> {
    self.variants.get(variant)
  }

  pub fn iter(&self) -> impl Iterator<Item = &Variant<P>> {
    self.variants.iter()
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.variants.iter().map(|variant| variant.name.as_str())
  }

  pub fn position(&self, name: &str) -> Option<usize> {
    self.variants.iter().position(|variant| variant.name == name)
  }
}

pub struct VariantTableBuilder<P: Property> {
  variants: Vec<(String, P::Class)>,
}

impl<P: Property> VariantTableBuilder<P> {
  /// Appends the next variant ordinal, bound to `name` and `class`.
  pub fn variant(mut self, name: impl Into<String>, class: P::Class) -> Self {
    self.variants.push((name.into(), class));
    self
  }

  pub fn build(self) -> Result<VariantTable<P>, VariatorError> {
    if self.variants.is_empty() {
      return Err(VariatorError::EmptyTable);
    }

    let mut variants: Vec<Variant<P>> = Vec::with_capacity(self.variants.len());
    for (name, class) in self.variants {
      if variants.iter().any(|variant| variant.name == name) {
        return Err(VariatorError::DuplicateLonghand { name });
      }

      let inherit = P::inherit(class).ok_or_else(|| VariatorError::NoInheritValue {
        name: name.clone(),
        class: format!("{:?}", class),
      })?;

      variants.push(Variant {
        name,
        class,
        inherit,
      });
    }

    Ok(VariantTable { variants })
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;
  use crate::test_utils::{TestClass, TestProperty};

  #[test]
  fn build_precomputes_inherit_values() {
    let table = VariantTable::<TestProperty>::builder()
      .variant("border-width", TestClass::Width)
      .variant("border-style", TestClass::Style)
      .build()
      .unwrap();

    assert_eq!(
      table.get(1).map(|variant| variant.inherit().clone()),
      Some(TestProperty::inherit_of(TestClass::Style))
    );
    assert_eq!(
      table.names().collect::<Vec<_>>(),
      vec!["border-width", "border-style"]
    );
  }

  #[test]
  fn build_rejects_classes_without_inherit() {
    let result = VariantTable::<TestProperty>::builder()
      .variant("border-width", TestClass::Width)
      .variant("zoom", TestClass::NoInherit)
      .build();

    assert_eq!(
      result,
      Err(VariatorError::NoInheritValue {
        name: "zoom".into(),
        class: "NoInherit".into(),
      })
    );
  }

  #[test]
  fn build_rejects_duplicate_and_empty_tables() {
    let duplicate = VariantTable::<TestProperty>::builder()
      .variant("border-width", TestClass::Width)
      .variant("border-width", TestClass::Style)
      .build();
    assert_eq!(
      duplicate,
      Err(VariatorError::DuplicateLonghand {
        name: "border-width".into()
      })
    );

    assert_eq!(
      VariantTable::<TestProperty>::builder().build(),
      Err(VariatorError::EmptyTable)
    );
  }
}
