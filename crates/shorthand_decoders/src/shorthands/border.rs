use shorthand_variator::{
  Defaults, Matched, Session, ShorthandGrammar, VariantTable, Variator, VariatorError,
};

use crate::decoder::Shorthand;
use crate::defaults::BORDER_SIDES;
use crate::property::{CssDeclaration, CssDecoded, CssProperty, PropertyClass};
use crate::values;

pub const WIDTH: usize = 0;
pub const STYLE: usize = 1;
pub const COLOR: usize = 2;

const STYLES: &[&str] = &[
  "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

#[derive(Clone, Copy, Debug, Default)]
pub struct BorderGrammar;

impl ShorthandGrammar<CssProperty> for BorderGrammar {
  fn variant(
    &self,
    variant: usize,
    session: &Session<'_, CssProperty>,
    index: usize,
  ) -> Option<Matched<CssProperty>> {
    let term = session.term(index)?;
    match variant {
      WIDTH => values::width(PropertyClass::BorderWidth, term),
      STYLE => values::keyword_of(PropertyClass::BorderStyle, term, STYLES),
      COLOR => values::color(PropertyClass::BorderColor, term),
      _ => None,
    }
  }
}

/// `border-top`, `border-right`, `border-bottom` and `border-left`.
pub struct BorderSide {
  name: String,
  variator: Variator<CssProperty, BorderGrammar>,
}

impl BorderSide {
  pub fn new(side: &str) -> Result<Self, VariatorError> {
    let table = VariantTable::builder()
      .variant(format!("border-{side}-width"), PropertyClass::BorderWidth)
      .variant(format!("border-{side}-style"), PropertyClass::BorderStyle)
      .variant(format!("border-{side}-color"), PropertyClass::BorderColor)
      .build()?;

    Ok(BorderSide {
      name: format!("border-{side}"),
      variator: Variator::new(table, BorderGrammar),
    })
  }
}

impl Shorthand for BorderSide {
  fn name(&self) -> &str {
    &self.name
  }

  fn longhands(&self) -> Vec<&str> {
    self.variator.table().names().collect()
  }

  fn decode(
    &self,
    declaration: &CssDeclaration,
    defaults: Option<&dyn Defaults<CssProperty>>,
  ) -> Option<CssDecoded> {
    super::vary(&self.variator, declaration, defaults)
  }
}

/// `border`, which sets the same width, style and color on all four sides.
pub struct Border {
  sides: Vec<BorderSide>,
}

impl Border {
  pub fn new() -> Result<Self, VariatorError> {
    let sides = BORDER_SIDES
      .iter()
      .map(|side| BorderSide::new(side))
      .collect::<Result<Vec<_>, _>>()?;
    Ok(Border { sides })
  }
}

impl Shorthand for Border {
  fn name(&self) -> &str {
    "border"
  }

  fn longhands(&self) -> Vec<&str> {
    self.sides.iter().flat_map(|side| side.longhands()).collect()
  }

  fn decode(
    &self,
    declaration: &CssDeclaration,
    defaults: Option<&dyn Defaults<CssProperty>>,
  ) -> Option<CssDecoded> {
    let mut out = CssDecoded::new();
    for side in &self.sides {
      out.merge(side.decode(declaration, defaults)?);
    }
    Some(out)
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use shorthand_variator::Term;

  use super::*;
  use crate::defaults::CssDefaults;
  use crate::property::PropertyValue;
  use crate::test_utils::{declaration, px};

  #[test]
  fn decodes_width_style_and_color() {
    let side = BorderSide::new("top").unwrap();
    let decoded = side
      .decode(
        &declaration(
          "border-top",
          vec![px(1.0), Term::ident("solid"), Term::ident("blue")],
        ),
        None,
      )
      .unwrap();

    assert_eq!(
      decoded.property("border-top-width"),
      Some(&CssProperty::new(
        PropertyClass::BorderWidth,
        PropertyValue::Length
      ))
    );
    assert_eq!(decoded.value("border-top-width"), Some(&px(1.0)));
    assert_eq!(
      decoded.property("border-top-style"),
      Some(&CssProperty::keyword(PropertyClass::BorderStyle, "solid"))
    );
    assert_eq!(decoded.value("border-top-color"), Some(&Term::ident("blue")));
  }

  #[test]
  fn missing_components_take_initial_values() {
    let side = BorderSide::new("left").unwrap();
    let decoded = side
      .decode(
        &declaration("border-left", vec![Term::ident("dashed")]),
        Some(&CssDefaults),
      )
      .unwrap();

    assert_eq!(
      decoded
        .properties
        .values()
        .map(|property| property.to_string())
        .collect::<Vec<_>>(),
      vec!["medium", "dashed", "currentcolor"]
    );
  }

  #[test]
  fn rejects_repeated_components() {
    let side = BorderSide::new("top").unwrap();

    assert_eq!(
      side.decode(&declaration("border-top", vec![px(1.0), px(2.0)]), None),
      None
    );
    assert_eq!(
      side.decode(&declaration("border-top", vec![px(-1.0)]), None),
      None
    );
    assert_eq!(side.decode(&declaration("border-top", vec![]), None), None);
  }

  #[test]
  fn border_applies_to_every_side() {
    let border = Border::new().unwrap();
    let decoded = border
      .decode(
        &declaration("border", vec![Term::ident("thick"), Term::ident("double")]),
        None,
      )
      .unwrap();

    assert_eq!(decoded.properties.len(), 8);
    for side in BORDER_SIDES {
      assert_eq!(
        decoded.property(&format!("border-{side}-style")),
        Some(&CssProperty::keyword(PropertyClass::BorderStyle, "double"))
      );
    }
  }

  #[test]
  fn inherit_applies_to_every_longhand() {
    let border = Border::new().unwrap();
    let decoded = border
      .decode(
        &declaration("border", vec![Term::ident("inherit")]),
        Some(&CssDefaults),
      )
      .unwrap();

    assert_eq!(decoded.properties.len(), 12);
    assert!(decoded
      .properties
      .values()
      .all(|property| property.value == PropertyValue::Inherit));
    assert!(decoded.values.is_empty());
  }
}
