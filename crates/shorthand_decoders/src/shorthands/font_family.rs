use shorthand_variator::{
  Defaults, Matched, Separator, Session, ShorthandGrammar, Term, TermValue, VariantTable, Variator,
  VariatorError, INHERIT_KEYWORD,
};

use crate::decoder::Shorthand;
use crate::property::{
  CssDeclaration, CssDecoded, CssProperty, CssTerm, PropertyClass, PropertyValue,
};
use crate::values;

pub const FAMILY: usize = 0;

const GENERIC_FAMILIES: &[&str] = &["serif", "sans-serif", "cursive", "fantasy", "monospace"];

/// Decodes one family name. Generic families become keywords; other names
/// are kept as strings, whether quoted or not.
pub(crate) fn family(term: &CssTerm) -> Option<Matched<CssProperty>> {
  let name = match &term.value {
    TermValue::String(name) => name,
    TermValue::Ident(name) => {
      let generic = values::keyword_of(PropertyClass::FontFamily, term, GENERIC_FAMILIES);
      if generic.is_some() {
        return generic;
      }
      name
    }
    _ => return None,
  };

  Some(Matched::value(
    CssProperty::new(PropertyClass::FontFamily, PropertyValue::FamilyName),
    CssTerm::string(name.clone()),
  ))
}

/// Joins runs of space separated identifiers into one unquoted family name,
/// e.g. `Times New Roman`. `inherit` is never joined.
pub(crate) fn join_names(terms: &[CssTerm]) -> Vec<CssTerm> {
  let mut joined: Vec<CssTerm> = Vec::with_capacity(terms.len());

  for term in terms {
    let part = term
      .as_ident()
      .filter(|_| term.separator == Some(Separator::Space) && !term.is_inherit());
    match (joined.last_mut(), part) {
      (
        Some(Term {
          value: TermValue::Ident(name),
          ..
        }),
        Some(part),
      ) if !name.eq_ignore_ascii_case(INHERIT_KEYWORD) => {
        name.push(' ');
        name.push_str(part);
      }
      _ => joined.push(term.clone()),
    }
  }

  joined
}

pub(crate) fn list_marker() -> CssProperty {
  CssProperty::new(PropertyClass::FontFamily, PropertyValue::ListValues)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FontFamilyGrammar;

impl ShorthandGrammar<CssProperty> for FontFamilyGrammar {
  fn variant(
    &self,
    variant: usize,
    session: &Session<'_, CssProperty>,
    index: usize,
  ) -> Option<Matched<CssProperty>> {
    match variant {
      FAMILY => family(session.term(index)?),
      _ => None,
    }
  }
}

/// `font-family`: a comma separated list of family names.
pub struct FontFamily {
  variator: Variator<CssProperty, FontFamilyGrammar>,
}

impl FontFamily {
  pub fn new() -> Result<Self, VariatorError> {
    let table = VariantTable::builder()
      .variant("font-family", PropertyClass::FontFamily)
      .build()?;

    Ok(FontFamily {
      variator: Variator::new(table, FontFamilyGrammar),
    })
  }
}

impl Shorthand for FontFamily {
  fn name(&self) -> &str {
    "font-family"
  }

  fn longhands(&self) -> Vec<&str> {
    self.variator.table().names().collect()
  }

  fn decode(
    &self,
    declaration: &CssDeclaration,
    defaults: Option<&dyn Defaults<CssProperty>>,
  ) -> Option<CssDecoded> {
    let declaration = CssDeclaration {
      terms: join_names(declaration.terms()),
      ..declaration.clone()
    };

    let mut decoded = CssDecoded::new();
    if !self
      .variator
      .try_list_of_one_term_variant(FAMILY, &declaration, list_marker(), &mut decoded)
    {
      return None;
    }
    Some(super::over_defaults(&self.variator, defaults, decoded))
  }
}
