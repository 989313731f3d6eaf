use std::fmt;

use shorthand_variator::{Declaration, Decoded, Property, Term, ValueType};

pub type CssTerm = Term<CssProperty>;
pub type CssDeclaration = Declaration<CssProperty>;
pub type CssDecoded = Decoded<CssProperty>;

/// The longhand a decoded value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyClass {
  BorderWidth,
  BorderStyle,
  BorderColor,
  OutlineColor,
  OutlineStyle,
  OutlineWidth,
  ListStyleType,
  ListStylePosition,
  ListStyleImage,
  FontStyle,
  FontVariant,
  FontWeight,
  FontSize,
  LineHeight,
  FontFamily,
  BoxShadow,
  BackgroundColor,
  BackgroundImage,
  BackgroundRepeat,
  BackgroundAttachment,
  BackgroundPosition,
  BackgroundSize,
  BackgroundOrigin,
  BackgroundClip,
}

impl PropertyClass {
  /// Whether the longhand takes one value per background layer.
  pub fn is_layered(self) -> bool {
    matches!(
      self,
      PropertyClass::BackgroundImage
        | PropertyClass::BackgroundRepeat
        | PropertyClass::BackgroundAttachment
        | PropertyClass::BackgroundPosition
        | PropertyClass::BackgroundSize
        | PropertyClass::BackgroundOrigin
        | PropertyClass::BackgroundClip
    )
  }
}

/// What a decoded longhand holds. Keywords carry their canonical spelling;
/// every other kind is accompanied by a value term.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyValue {
  Inherit,
  Keyword(&'static str),
  Length,
  Percentage,
  Number,
  Color,
  Uri,
  Gradient,
  FamilyName,
  Shadow,
  /// The value is a list of terms or of decoded `(kind, value)` pairs.
  ListValues,
  /// The value holds one decoded `(kind, value)` pair per layer.
  NestedList,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CssProperty {
  pub class: PropertyClass,
  pub value: PropertyValue,
}

impl CssProperty {
  pub fn new(class: PropertyClass, value: PropertyValue) -> Self {
    CssProperty { class, value }
  }

  pub fn keyword(class: PropertyClass, keyword: &'static str) -> Self {
    CssProperty::new(class, PropertyValue::Keyword(keyword))
  }

  pub fn as_keyword(&self) -> Option<&'static str> {
    match self.value {
      PropertyValue::Keyword(keyword) => Some(keyword),
      _ => None,
    }
  }
}

impl Property for CssProperty {
  type Class = PropertyClass;

  fn class(&self) -> PropertyClass {
    self.class
  }

  fn value_type(&self) -> ValueType {
    if self.class.is_layered() {
      ValueType::List
    } else {
      ValueType::Simple
    }
  }

  fn inherit(class: PropertyClass) -> Option<Self> {
    Some(CssProperty::new(class, PropertyValue::Inherit))
  }

  fn nested_list(class: PropertyClass) -> Self {
    CssProperty::new(class, PropertyValue::NestedList)
  }
}

impl fmt::Display for CssProperty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match &self.value {
      PropertyValue::Inherit => "inherit",
      PropertyValue::Keyword(keyword) => keyword,
      PropertyValue::Length => "length",
      PropertyValue::Percentage => "percentage",
      PropertyValue::Number => "number",
      PropertyValue::Color => "color",
      PropertyValue::Uri => "uri",
      PropertyValue::Gradient => "gradient",
      PropertyValue::FamilyName => "family-name",
      PropertyValue::Shadow => "shadow",
      PropertyValue::ListValues => "list-values",
      PropertyValue::NestedList => "nested-list",
    };
    f.write_str(name)
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn only_background_layer_longhands_are_list_typed() {
    let repeat = CssProperty::keyword(PropertyClass::BackgroundRepeat, "no-repeat");
    let color = CssProperty::new(PropertyClass::BackgroundColor, PropertyValue::Color);

    assert_eq!(repeat.value_type(), ValueType::List);
    assert_eq!(color.value_type(), ValueType::Simple);
    assert_eq!(
      CssProperty::keyword(PropertyClass::BorderStyle, "solid").value_type(),
      ValueType::Simple
    );
  }

  #[test]
  fn every_class_has_an_inherit_kind() {
    assert_eq!(
      CssProperty::inherit(PropertyClass::FontFamily),
      Some(CssProperty::new(
        PropertyClass::FontFamily,
        PropertyValue::Inherit
      ))
    );
  }

  #[test]
  fn displays_keywords_verbatim() {
    let term = CssTerm::property_value(
      CssProperty::new(PropertyClass::BorderWidth, PropertyValue::Length),
      Some(CssTerm::ident("thin")),
    );

    assert_eq!(
      CssProperty::keyword(PropertyClass::BorderStyle, "groove").to_string(),
      "groove"
    );
    assert_eq!(term.to_string(), "length=thin");
  }
}
