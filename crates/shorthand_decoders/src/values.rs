//! Classification of single terms shared by the shorthand grammars.

use csscolorparser::Color;
use shorthand_variator::{Matched, TermValue};

use crate::property::{CssProperty, CssTerm, PropertyClass, PropertyValue};

const COLOR_KEYWORDS: &[&str] = &["transparent", "currentcolor"];
const COLOR_FUNCTIONS: &[&str] = &["rgb", "rgba", "hsl", "hsla", "hwb"];
const GRADIENT_FUNCTIONS: &[&str] = &[
  "linear-gradient",
  "radial-gradient",
  "repeating-linear-gradient",
  "repeating-radial-gradient",
  "conic-gradient",
];

/// Returns the canonical spelling of `term` when it is one of `keywords`.
pub fn keyword(term: &CssTerm, keywords: &[&'static str]) -> Option<&'static str> {
  let ident = term.as_ident()?;
  keywords
    .iter()
    .copied()
    .find(|keyword| keyword.eq_ignore_ascii_case(ident))
}

/// A length, or the unitless zero.
pub fn is_length(term: &CssTerm) -> bool {
  match term.value {
    TermValue::Length(..) => true,
    TermValue::Number(value) => value == 0.0,
    _ => false,
  }
}

pub fn is_non_negative_length(term: &CssTerm) -> bool {
  match term.value {
    TermValue::Length(value, _) => value >= 0.0,
    TermValue::Number(value) => value == 0.0,
    _ => false,
  }
}

pub fn is_percentage(term: &CssTerm) -> bool {
  matches!(term.value, TermValue::Percent(_))
}

pub fn is_length_or_percentage(term: &CssTerm) -> bool {
  is_length(term) || is_percentage(term)
}

pub fn is_color(term: &CssTerm) -> bool {
  match &term.value {
    TermValue::Color(_) => true,
    TermValue::Ident(ident) => is_color_keyword(ident),
    TermValue::Function { name, .. } => COLOR_FUNCTIONS
      .iter()
      .any(|function| function.eq_ignore_ascii_case(name)),
    _ => false,
  }
}

fn is_color_keyword(word: &str) -> bool {
  if COLOR_KEYWORDS
    .iter()
    .any(|keyword| keyword.eq_ignore_ascii_case(word))
  {
    return true;
  }
  // The parser also reads bare hex digits ("add", "bed") as colors.
  if word.chars().all(|c| c.is_ascii_hexdigit()) {
    return false;
  }

  Color::from_html(word).is_ok()
}

pub fn is_uri(term: &CssTerm) -> bool {
  matches!(term.value, TermValue::Uri(_))
}

pub fn is_gradient(term: &CssTerm) -> bool {
  match &term.value {
    TermValue::Function { name, .. } => GRADIENT_FUNCTIONS
      .iter()
      .any(|function| function.eq_ignore_ascii_case(name)),
    _ => false,
  }
}

/// Matches `term` as a keyword of `class`.
pub fn keyword_of(
  class: PropertyClass,
  term: &CssTerm,
  keywords: &[&'static str],
) -> Option<Matched<CssProperty>> {
  keyword(term, keywords).map(|keyword| Matched::keyword(CssProperty::keyword(class, keyword)))
}

/// Matches `term` as a valued kind of `class`.
pub fn valued(class: PropertyClass, value: PropertyValue, term: &CssTerm) -> Matched<CssProperty> {
  Matched::value(CssProperty::new(class, value), term.clone())
}

/// Matches a border or outline width.
pub fn width(class: PropertyClass, term: &CssTerm) -> Option<Matched<CssProperty>> {
  if is_non_negative_length(term) {
    return Some(valued(class, PropertyValue::Length, term));
  }
  keyword_of(class, term, &["thin", "medium", "thick"])
}

pub fn color(class: PropertyClass, term: &CssTerm) -> Option<Matched<CssProperty>> {
  is_color(term).then(|| valued(class, PropertyValue::Color, term))
}
