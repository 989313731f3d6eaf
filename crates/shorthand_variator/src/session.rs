use crate::term::Term;

/// Mutable state of one independent matching pass: the terms being scanned
/// and which variants have already been satisfied.
///
/// A session is created for every pass (one declaration, or one layer of a
/// layered declaration) and is never reused.
#[derive(Debug)]
pub struct Session<'t, P> {
  terms: &'t [Term<P>],
  passed: Vec<bool>,
}

impl<'t, P> Session<'t, P> {
  pub(crate) fn new(terms: &'t [Term<P>], variants: usize) -> Self {
    Session {
      terms,
      passed: vec![false; variants],
    }
  }

  pub fn terms(&self) -> &'t [Term<P>] {
    self.terms
  }

  pub fn term(&self, index: usize) -> Option<&'t Term<P>> {
    self.terms.get(index)
  }

  pub fn len(&self) -> usize {
    self.terms.len()
  }

  pub fn is_empty(&self) -> bool {
    self.terms.is_empty()
  }

  /// Whether `variant` already matched during this pass.
  pub fn passed(&self, variant: usize) -> bool {
    self.passed.get(variant).copied().unwrap_or(false)
  }

  pub(crate) fn mark_passed(&mut self, variant: usize) {
    if let Some(passed) = self.passed.get_mut(variant) {
      debug_assert!(!*passed, "variant {variant} matched twice in one pass");
      *passed = true;
    }
  }
}
