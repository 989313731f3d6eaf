use shorthand_variator::{
  Defaults, Matched, Session, ShorthandGrammar, VariantTable, Variator, VariatorError,
};

use crate::decoder::Shorthand;
use crate::property::{
  CssDeclaration, CssDecoded, CssProperty, CssTerm, PropertyClass, PropertyValue,
};
use crate::values;

pub const SHADOW: usize = 0;

#[derive(Clone, Copy, Debug, Default)]
pub struct BoxShadowGrammar;

impl BoxShadowGrammar {
  /// `inset? <length>{2,4} <color>?`, with `inset` and the color allowed on
  /// either side of the lengths.
  fn shadow(terms: &[CssTerm]) -> Option<Matched<CssProperty>> {
    let mut inset = false;
    let mut color = false;
    let mut lengths = 0;
    let mut lengths_closed = false;

    for term in terms {
      if values::is_length(term) {
        // blur radius
        if lengths_closed || (lengths == 2 && !values::is_non_negative_length(term)) {
          return None;
        }
        lengths += 1;
        continue;
      }

      if term.is_ident("inset") && !inset {
        inset = true;
      } else if values::is_color(term) && !color {
        color = true;
      } else {
        return None;
      }
      lengths_closed = lengths > 0;
    }

    if !(2..=4).contains(&lengths) {
      return None;
    }

    let items = terms
      .iter()
      .enumerate()
      .map(|(index, term)| {
        if index == 0 {
          term.without_separator()
        } else {
          term.clone()
        }
      })
      .collect();
    Some(
      Matched::value(
        CssProperty::new(PropertyClass::BoxShadow, PropertyValue::Shadow),
        CssTerm::list(items),
      )
      .consuming(terms.len()),
    )
  }
}

impl ShorthandGrammar<CssProperty> for BoxShadowGrammar {
  fn variant(
    &self,
    variant: usize,
    session: &Session<'_, CssProperty>,
    index: usize,
  ) -> Option<Matched<CssProperty>> {
    if variant != SHADOW {
      return None;
    }

    let terms = session.terms().get(index..)?;
    match terms {
      [term] => values::keyword_of(PropertyClass::BoxShadow, term, &["none"]),
      _ => Self::shadow(terms),
    }
  }
}

/// `box-shadow`: `none`, or a comma separated list of shadows.
pub struct BoxShadow {
  variator: Variator<CssProperty, BoxShadowGrammar>,
}

impl BoxShadow {
  pub fn new() -> Result<Self, VariatorError> {
    let table = VariantTable::builder()
      .variant("box-shadow", PropertyClass::BoxShadow)
      .build()?;

    Ok(BoxShadow {
      variator: Variator::new(table, BoxShadowGrammar),
    })
  }
}

impl Shorthand for BoxShadow {
  fn name(&self) -> &str {
    "box-shadow"
  }

  fn longhands(&self) -> Vec<&str> {
    self.variator.table().names().collect()
  }

  fn decode(
    &self,
    declaration: &CssDeclaration,
    defaults: Option<&dyn Defaults<CssProperty>>,
  ) -> Option<CssDecoded> {
    let mut decoded = CssDecoded::new();
    let matched = if declaration.len() == 1 {
      self
        .variator
        .try_one_term_variant(SHADOW, declaration, &mut decoded)
    } else if declaration.terms().iter().any(|term| term.is_ident("none")) {
      false
    } else {
      self.variator.try_list_of_multi_term_variant(
        SHADOW,
        declaration,
        CssProperty::new(PropertyClass::BoxShadow, PropertyValue::ListValues),
        &mut decoded,
      )
    };

    if !matched {
      return None;
    }
    Some(super::over_defaults(&self.variator, defaults, decoded))
  }
}
