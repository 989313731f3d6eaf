use shorthand_variator::{
  Defaults, Matched, Separator, Session, ShorthandGrammar, TermValue, VariantTable, Variator,
  VariatorError,
};

use super::font_family::{family, join_names, list_marker};
use crate::decoder::Shorthand;
use crate::property::{
  CssDeclaration, CssDecoded, CssProperty, CssTerm, PropertyClass, PropertyValue,
};
use crate::values;

pub const STYLE: usize = 0;
pub const VARIANT: usize = 1;
pub const WEIGHT: usize = 2;
pub const SIZE: usize = 3;
pub const LINE_HEIGHT: usize = 4;
pub const FAMILY: usize = 5;

const STYLES: &[&str] = &["normal", "italic", "oblique"];
const VARIANTS: &[&str] = &["normal", "small-caps"];
const WEIGHTS: &[&str] = &["normal", "bold", "bolder", "lighter"];
const SIZES: &[&str] = &[
  "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large", "larger", "smaller",
];

#[derive(Clone, Copy, Debug, Default)]
pub struct FontGrammar;

impl FontGrammar {
  fn weight(term: &CssTerm) -> Option<Matched<CssProperty>> {
    match term.value {
      TermValue::Number(weight) if (100.0..=900.0).contains(&weight) && weight % 100.0 == 0.0 => {
        Some(values::valued(
          PropertyClass::FontWeight,
          PropertyValue::Number,
          term,
        ))
      }
      _ => values::keyword_of(PropertyClass::FontWeight, term, WEIGHTS),
    }
  }

  fn size(term: &CssTerm) -> Option<Matched<CssProperty>> {
    if values::is_non_negative_length(term) {
      return Some(values::valued(PropertyClass::FontSize, PropertyValue::Length, term));
    }
    if values::is_percentage(term) {
      return Some(values::valued(
        PropertyClass::FontSize,
        PropertyValue::Percentage,
        term,
      ));
    }
    values::keyword_of(PropertyClass::FontSize, term, SIZES)
  }

  fn line_height(term: &CssTerm) -> Option<Matched<CssProperty>> {
    let value = match term.value {
      TermValue::Number(number) if number >= 0.0 => PropertyValue::Number,
      TermValue::Percent(_) => PropertyValue::Percentage,
      _ if values::is_non_negative_length(term) => PropertyValue::Length,
      _ => return values::keyword_of(PropertyClass::LineHeight, term, &["normal"]),
    };
    Some(values::valued(PropertyClass::LineHeight, value, term))
  }

  /// The family list takes every remaining term.
  fn families(session: &Session<'_, CssProperty>, index: usize) -> Option<Matched<CssProperty>> {
    let terms = session.terms().get(index..)?;
    let names = join_names(terms);
    let mut items = Vec::with_capacity(names.len());

    for (position, term) in names.iter().enumerate() {
      if position > 0 && term.separator != Some(Separator::Comma) {
        return None;
      }
      let matched = family(term)?;
      let item = CssTerm::property_value(matched.property, matched.value);
      items.push(if position == 0 {
        item
      } else {
        item.with_separator(Separator::Comma)
      });
    }

    Some(Matched::value(list_marker(), CssTerm::list(items)).consuming(terms.len()))
  }
}

impl ShorthandGrammar<CssProperty> for FontGrammar {
  fn variant(
    &self,
    variant: usize,
    session: &Session<'_, CssProperty>,
    index: usize,
  ) -> Option<Matched<CssProperty>> {
    let term = session.term(index)?;
    match variant {
      STYLE => values::keyword_of(PropertyClass::FontStyle, term, STYLES),
      VARIANT => values::keyword_of(PropertyClass::FontVariant, term, VARIANTS),
      WEIGHT => Self::weight(term),
      SIZE => Self::size(term),
      LINE_HEIGHT => Self::line_height(term),
      FAMILY => Self::families(session, index),
      _ => None,
    }
  }

  fn variant_condition(
    &self,
    variant: usize,
    session: &Session<'_, CssProperty>,
    index: usize,
  ) -> bool {
    let slashed = session
      .term(index)
      .is_some_and(|term| term.separator == Some(Separator::Slash));

    match variant {
      STYLE | VARIANT | WEIGHT => !slashed && !session.passed(SIZE),
      SIZE => !slashed,
      LINE_HEIGHT => slashed && session.passed(SIZE),
      FAMILY => !slashed && session.passed(SIZE),
      _ => false,
    }
  }
}

/// `font: [style || variant || weight]? size [/ line-height]? family`.
///
/// System fonts (`caption`, `icon`, `menu`, `message-box`, `small-caption`,
/// `status-bar`) are not decoded; such declarations are dropped.
pub struct Font {
  variator: Variator<CssProperty, FontGrammar>,
}

impl Font {
  pub fn new() -> Result<Self, VariatorError> {
    let table = VariantTable::builder()
      .variant("font-style", PropertyClass::FontStyle)
      .variant("font-variant", PropertyClass::FontVariant)
      .variant("font-weight", PropertyClass::FontWeight)
      .variant("font-size", PropertyClass::FontSize)
      .variant("line-height", PropertyClass::LineHeight)
      .variant("font-family", PropertyClass::FontFamily)
      .build()?;

    Ok(Font {
      variator: Variator::new(table, FontGrammar),
    })
  }
}

impl Shorthand for Font {
  fn name(&self) -> &str {
    "font"
  }

  fn longhands(&self) -> Vec<&str> {
    self.variator.table().names().collect()
  }

  fn decode(
    &self,
    declaration: &CssDeclaration,
    defaults: Option<&dyn Defaults<CssProperty>>,
  ) -> Option<CssDecoded> {
    if declaration.is_empty() {
      return None;
    }

    let mut decoded = CssDecoded::new();
    if !self.variator.vary(declaration.terms(), &mut decoded) {
      return None;
    }
    if decoded.property("font-size").is_none() || decoded.property("font-family").is_none() {
      tracing::trace!(value = %declaration, "font needs both a size and a family");
      return None;
    }

    Some(super::over_defaults(&self.variator, defaults, decoded))
  }
}
