use crate::decoded::Decoded;
use crate::property::Property;
use crate::session::Session;
use crate::term::Term;

/// Outcome of a successful variant predicate.
#[derive(Clone, Debug, PartialEq)]
pub struct Matched<P> {
  pub property: P,
  pub value: Option<Term<P>>,
  /// Number of terms the variant used, starting at the tested position.
  pub consumed: usize,
}

impl<P> Matched<P> {
  /// A kind that needs no value, e.g. `border-style: solid`.
  pub fn keyword(property: P) -> Self {
    Matched {
      property,
      value: None,
      consumed: 1,
    }
  }

  pub fn value(property: P, value: Term<P>) -> Self {
    Matched {
      property,
      value: Some(value),
      consumed: 1,
    }
  }

  pub fn consuming(mut self, consumed: usize) -> Self {
    self.consumed = consumed;
    self
  }
}

/// The grammar of one shorthand, plugged into a [`crate::Variator`].
///
/// Only [`ShorthandGrammar::variant`] is mandatory; the remaining hooks
/// accept everything by default.
pub trait ShorthandGrammar<P: Property> {
  /// Tries to decode the term at `index` (and possibly the terms following
  /// it) as `variant`.
  fn variant(&self, variant: usize, session: &Session<'_, P>, index: usize) -> Option<Matched<P>>;

  /// Whether `variant` may be tried at `index` at all, e.g. a line height must
  /// directly follow a slash and a font size.
  fn variant_condition(&self, _variant: usize, _session: &Session<'_, P>, _index: usize) -> bool {
    true
  }

  /// Completes one decoded layer of a layered declaration before it is
  /// validated, e.g. derives a longhand the layer left unset from one it set.
  fn complete_list_item(&self, _session: &Session<'_, P>, _layer: &mut Decoded<P>) {}

  /// Validates one decoded layer of a layered declaration.
  fn validate_list_item(
    &self,
    _index: usize,
    _size: usize,
    _session: &Session<'_, P>,
    _layer: &Decoded<P>,
  ) -> bool {
    true
  }

  /// Validates the accumulated result of all layers.
  fn validate_list(&self, _size: usize, _decoded: &Decoded<P>) -> bool {
    true
  }
}
