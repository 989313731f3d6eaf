use shorthand_variator::{
  Defaults, Matched, Session, ShorthandGrammar, VariantTable, Variator, VariatorError,
};

use crate::decoder::Shorthand;
use crate::property::{CssDeclaration, CssDecoded, CssProperty, PropertyClass};
use crate::values;

pub const COLOR: usize = 0;
pub const STYLE: usize = 1;
pub const WIDTH: usize = 2;

const STYLES: &[&str] = &[
  "auto", "none", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

#[derive(Clone, Copy, Debug, Default)]
pub struct OutlineGrammar;

impl ShorthandGrammar<CssProperty> for OutlineGrammar {
  fn variant(
    &self,
    variant: usize,
    session: &Session<'_, CssProperty>,
    index: usize,
  ) -> Option<Matched<CssProperty>> {
    let term = session.term(index)?;
    match variant {
      COLOR => values::keyword_of(PropertyClass::OutlineColor, term, &["invert"])
        .or_else(|| values::color(PropertyClass::OutlineColor, term)),
      STYLE => values::keyword_of(PropertyClass::OutlineStyle, term, STYLES),
      WIDTH => values::width(PropertyClass::OutlineWidth, term),
      _ => None,
    }
  }
}

pub struct Outline {
  variator: Variator<CssProperty, OutlineGrammar>,
}

impl Outline {
  pub fn new() -> Result<Self, VariatorError> {
    let table = VariantTable::builder()
      .variant("outline-color", PropertyClass::OutlineColor)
      .variant("outline-style", PropertyClass::OutlineStyle)
      .variant("outline-width", PropertyClass::OutlineWidth)
      .build()?;

    Ok(Outline {
      variator: Variator::new(table, OutlineGrammar),
    })
  }
}

impl Shorthand for Outline {
  fn name(&self) -> &str {
    "outline"
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
