use crate::property::Property;
use crate::term::Term;

/// Initial values of longhand properties, keyed by longhand name.
pub trait Defaults<P: Property> {
  fn default_property(&self, name: &str) -> Option<P>;

  fn default_value(&self, name: &str) -> Option<Term<P>>;
}

/// A defaults table without any entries.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDefaults;

impl<P: Property> Defaults<P> for NoDefaults {
  fn default_property(&self, _name: &str) -> Option<P> {
    None
  }

  fn default_value(&self, _name: &str) -> Option<Term<P>> {
    None
  }
}
