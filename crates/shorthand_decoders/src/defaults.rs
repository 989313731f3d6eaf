use std::sync::LazyLock;

use indexmap::IndexMap;
use shorthand_variator::{Defaults, Separator};

use crate::property::{CssProperty, CssTerm, PropertyClass, PropertyValue};

pub const BORDER_SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

type InitialValue = (CssProperty, Option<CssTerm>);

static INITIAL_VALUES: LazyLock<IndexMap<String, InitialValue>> = LazyLock::new(|| {
  use PropertyClass::*;

  let keyword = |class: PropertyClass, name: &'static str| -> InitialValue {
    (CssProperty::keyword(class, name), None)
  };
  let mut values: IndexMap<String, InitialValue> = IndexMap::new();

  for side in BORDER_SIDES {
    values.insert(format!("border-{side}-width"), keyword(BorderWidth, "medium"));
    values.insert(format!("border-{side}-style"), keyword(BorderStyle, "none"));
    values.insert(
      format!("border-{side}-color"),
      keyword(BorderColor, "currentcolor"),
    );
  }

  let entries = [
    ("outline-color", keyword(OutlineColor, "currentcolor")),
    ("outline-style", keyword(OutlineStyle, "none")),
    ("outline-width", keyword(OutlineWidth, "medium")),
    ("list-style-type", keyword(ListStyleType, "disc")),
    ("list-style-position", keyword(ListStylePosition, "outside")),
    ("list-style-image", keyword(ListStyleImage, "none")),
    ("font-style", keyword(FontStyle, "normal")),
    ("font-variant", keyword(FontVariant, "normal")),
    ("font-weight", keyword(FontWeight, "normal")),
    ("font-size", keyword(FontSize, "medium")),
    ("line-height", keyword(LineHeight, "normal")),
    ("box-shadow", keyword(BoxShadow, "none")),
    ("background-color", keyword(BackgroundColor, "transparent")),
    ("background-image", keyword(BackgroundImage, "none")),
    ("background-repeat", keyword(BackgroundRepeat, "repeat")),
    ("background-attachment", keyword(BackgroundAttachment, "scroll")),
    (
      "background-position",
      (
        CssProperty::new(BackgroundPosition, PropertyValue::ListValues),
        Some(CssTerm::list(vec![
          CssTerm::percent(0.0),
          CssTerm::percent(0.0).with_separator(Separator::Space),
        ])),
      ),
    ),
    ("background-size", keyword(BackgroundSize, "auto")),
    ("background-origin", keyword(BackgroundOrigin, "padding-box")),
    ("background-clip", keyword(BackgroundClip, "border-box")),
  ];
  for (name, value) in entries {
    values.insert(name.to_string(), value);
  }

  values
});

/// Initial values of every longhand produced by the bundled shorthands.
///
/// `font-family` has no entry; its initial value depends on the user agent.
#[derive(Clone, Copy, Debug, Default)]
pub struct CssDefaults;

impl Defaults<CssProperty> for CssDefaults {
  fn default_property(&self, name: &str) -> Option<CssProperty> {
    INITIAL_VALUES.get(name).map(|(property, _)| property.clone())
  }

  fn default_value(&self, name: &str) -> Option<CssTerm> {
    INITIAL_VALUES.get(name).and_then(|(_, value)| value.clone())
  }
}
