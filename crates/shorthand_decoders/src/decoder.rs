use indexmap::IndexMap;
use shorthand_variator::Defaults;

use crate::defaults::CssDefaults;
use crate::error::DecoderError;
use crate::options::DecoderOptions;
use crate::property::{CssDeclaration, CssDecoded, CssProperty};
use crate::shorthands;

/// Decoding strategy of one shorthand property.
pub trait Shorthand: Send + Sync {
  /// The lowercase property name this strategy decodes.
  fn name(&self) -> &str;

  /// The longhands the strategy may produce.
  fn longhands(&self) -> Vec<&str>;

  /// Decodes `declaration` into its longhands, or `None` when the
  /// declaration is invalid and has to be dropped.
  ///
  /// With `defaults`, longhands the declaration leaves unset are filled in
  /// with their initial values.
  fn decode(
    &self,
    declaration: &CssDeclaration,
    defaults: Option<&dyn Defaults<CssProperty>>,
  ) -> Option<CssDecoded>;
}

/// Entry point for decoding shorthand declarations, dispatching on the
/// property name.
pub struct ShorthandDecoder {
  shorthands: IndexMap<String, Box<dyn Shorthand>>,
  options: DecoderOptions,
}

impl ShorthandDecoder {
  pub fn new(options: DecoderOptions) -> Result<Self, DecoderError> {
    let mut shorthands: IndexMap<String, Box<dyn Shorthand>> = shorthands::all()?
      .into_iter()
      .map(|shorthand| (shorthand.name().to_string(), shorthand))
      .collect();

    for name in &options.disabled_shorthands {
      let name = name.to_ascii_lowercase();
      if shorthands::NAMES.iter().all(|known| *known != name) {
        return Err(DecoderError::UnknownShorthand { name });
      }
      shorthands.shift_remove(&name);
    }

    Ok(ShorthandDecoder {
      shorthands,
      options,
    })
  }

  pub fn options(&self) -> &DecoderOptions {
    &self.options
  }

  /// Whether declarations of `property` are decoded.
  pub fn is_shorthand(&self, property: &str) -> bool {
    self
      .shorthands
      .contains_key(property.to_ascii_lowercase().as_str())
  }

  pub fn shorthand(&self, property: &str) -> Option<&dyn Shorthand> {
    self
      .shorthands
      .get(property.to_ascii_lowercase().as_str())
      .map(|shorthand| shorthand.as_ref())
  }

  /// Decodes one declaration. Returns `None` when the property is not a
  /// decoded shorthand or its value is invalid.
  pub fn decode(&self, declaration: &CssDeclaration) -> Option<CssDecoded> {
    let Some(shorthand) = self.shorthand(&declaration.property) else {
      tracing::debug!(property = %declaration.property, "Not a decoded shorthand");
      return None;
    };

    let defaults: Option<&dyn Defaults<CssProperty>> = if self.options.expand_initial_values {
      Some(&CssDefaults)
    } else {
      None
    };

    let decoded = shorthand.decode(declaration, defaults);
    match &decoded {
      Some(decoded) => tracing::debug!(
        property = shorthand.name(),
        longhands = decoded.properties.len(),
        "Decoded shorthand"
      ),
      None => tracing::debug!(
        property = shorthand.name(),
        value = %declaration,
        "Dropping invalid shorthand declaration"
      ),
    }
    decoded
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use shorthand_variator::{LengthUnit, Term};

  use super::*;
  use crate::test_utils::spaced;

  #[test]
  fn dispatches_on_the_property_name_ignoring_case() {
    let decoder = ShorthandDecoder::new(DecoderOptions::default()).unwrap();
    let declaration = CssDeclaration::new(
      "OUTLINE",
      spaced(vec![Term::ident("red"), Term::ident("dotted")]),
    );

    let decoded = decoder.decode(&declaration).unwrap();
    assert_eq!(
      decoded.properties.keys().collect::<Vec<_>>(),
      vec!["outline-color", "outline-style", "outline-width"]
    );
  }

  #[test]
  fn ignores_properties_without_a_strategy() {
    let decoder = ShorthandDecoder::new(DecoderOptions::default()).unwrap();

    assert!(!decoder.is_shorthand("margin"));
    assert_eq!(
      decoder.decode(&CssDeclaration::new(
        "margin",
        vec![Term::length(1.0, LengthUnit::Px)]
      )),
      None
    );
  }

  #[test]
  fn disabled_shorthands_are_not_decoded() {
    let decoder = ShorthandDecoder::new(DecoderOptions {
      disabled_shorthands: vec!["Font".into()],
      ..DecoderOptions::default()
    })
    .unwrap();

    assert!(!decoder.is_shorthand("font"));
    assert!(decoder.is_shorthand("font-family"));
  }

  #[test]
  fn rejects_unknown_disabled_shorthands() {
    let result = ShorthandDecoder::new(DecoderOptions {
      disabled_shorthands: vec!["margin".into()],
      ..DecoderOptions::default()
    });

    assert!(matches!(
      result,
      Err(DecoderError::UnknownShorthand { name }) if name == "margin"
    ));
  }

  #[test]
  fn initial_values_can_be_left_out() {
    let decoder = ShorthandDecoder::new(DecoderOptions {
      expand_initial_values: false,
      ..DecoderOptions::default()
    })
    .unwrap();
    let declaration = CssDeclaration::new("outline", vec![Term::ident("dotted")]);

    let decoded = decoder.decode(&declaration).unwrap();
    assert_eq!(
      decoded.properties.keys().collect::<Vec<_>>(),
      vec!["outline-style"]
    );
  }
}
