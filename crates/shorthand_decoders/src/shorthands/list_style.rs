use shorthand_variator::{
  Defaults, Matched, Session, ShorthandGrammar, VariantTable, Variator, VariatorError,
};

use crate::decoder::Shorthand;
use crate::property::{CssDeclaration, CssDecoded, CssProperty, PropertyClass, PropertyValue};
use crate::values;

pub const TYPE: usize = 0;
pub const POSITION: usize = 1;
pub const IMAGE: usize = 2;

const TYPES: &[&str] = &[
  "disc",
  "circle",
  "square",
  "decimal",
  "decimal-leading-zero",
  "lower-roman",
  "upper-roman",
  "lower-greek",
  "lower-latin",
  "upper-latin",
  "lower-alpha",
  "upper-alpha",
  "armenian",
  "georgian",
  "none",
];

#[derive(Clone, Copy, Debug, Default)]
pub struct ListStyleGrammar;

impl ShorthandGrammar<CssProperty> for ListStyleGrammar {
  fn variant(
    &self,
    variant: usize,
    session: &Session<'_, CssProperty>,
    index: usize,
  ) -> Option<Matched<CssProperty>> {
    let term = session.term(index)?;
    match variant {
      TYPE => values::keyword_of(PropertyClass::ListStyleType, term, TYPES),
      POSITION => values::keyword_of(
        PropertyClass::ListStylePosition,
        term,
        &["inside", "outside"],
      ),
      IMAGE if values::is_uri(term) => Some(values::valued(
        PropertyClass::ListStyleImage,
        PropertyValue::Uri,
        term,
      )),
      IMAGE => values::keyword_of(PropertyClass::ListStyleImage, term, &["none"]),
      _ => None,
    }
  }
}

/// `list-style`. A lone `none` is taken as the marker type, which leaves the
/// image at its initial `none` as well.
pub struct ListStyle {
  variator: Variator<CssProperty, ListStyleGrammar>,
}

impl ListStyle {
  pub fn new() -> Result<Self, VariatorError> {
    let table = VariantTable::builder()
      .variant("list-style-type", PropertyClass::ListStyleType)
      .variant("list-style-position", PropertyClass::ListStylePosition)
      .variant("list-style-image", PropertyClass::ListStyleImage)
      .build()?;

    Ok(ListStyle {
      variator: Variator::new(table, ListStyleGrammar),
    })
  }
}

impl Shorthand for ListStyle {
  fn name(&self) -> &str {
    "list-style"
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
