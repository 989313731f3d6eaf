use std::fmt;

use crate::term::{Separator, Term};

/// One authored `property: value` declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration<P> {
  pub property: String,
  pub terms: Vec<Term<P>>,
  pub important: bool,
}

impl<P> Declaration<P> {
  pub fn new(property: impl Into<String>, terms: Vec<Term<P>>) -> Self {
    Declaration {
      property: property.into(),
      terms,
      important: false,
    }
  }

  pub fn len(&self) -> usize {
    self.terms.len()
  }

  pub fn is_empty(&self) -> bool {
    self.terms.is_empty()
  }

  pub fn terms(&self) -> &[Term<P>] {
    &self.terms
  }
}

impl<P: Clone> Declaration<P> {
  /// Splits the declaration into sub-declarations wherever a term carries
  /// `separator`.
  ///
  /// The splitting term opens the next sub-declaration with its separator
  /// cleared, so every sub-declaration starts like a standalone one. The
  /// result always contains at least one (possibly empty) sub-declaration.
  pub fn split(&self, separator: Separator) -> Vec<Declaration<P>> {
    let mut subs = Vec::new();
    let mut current = Vec::new();

    for term in &self.terms {
      if term.separator == Some(separator) {
        subs.push(self.with_terms(std::mem::take(&mut current)));
        current.push(term.without_separator());
      } else {
        current.push(term.clone());
      }
    }
    subs.push(self.with_terms(current));

    subs
  }

  fn with_terms(&self, terms: Vec<Term<P>>) -> Declaration<P> {
    Declaration {
      property: self.property.clone(),
      terms,
      important: self.important,
    }
  }
}

impl<P: fmt::Display> fmt::Display for Declaration<P> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: ", self.property)?;
    for term in &self.terms {
      write!(f, "{term}")?;
    }
    if self.important {
      f.write_str(" !important")?;
    }
    Ok(())
  }
}
