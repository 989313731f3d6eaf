use shorthand_variator::{LengthUnit, Separator};

use crate::property::{CssDeclaration, CssTerm};

pub fn spaced(mut terms: Vec<CssTerm>) -> Vec<CssTerm> {
  for term in terms.iter_mut().skip(1) {
    if term.separator.is_none() {
      term.set_separator(Some(Separator::Space));
    }
  }
  terms
}

pub fn px(value: f32) -> CssTerm {
  CssTerm::length(value, LengthUnit::Px)
}

/// A declaration of space separated terms.
pub fn declaration(property: &str, terms: Vec<CssTerm>) -> CssDeclaration {
  CssDeclaration::new(property, spaced(terms))
}
