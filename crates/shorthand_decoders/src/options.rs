use serde::Deserialize;

use crate::error::DecoderError;

/// Options of a [`crate::ShorthandDecoder`], usually read from a JSON5 file:
///
/// ```json5
/// {
///   // decode everything except the font shorthand
///   disabledShorthands: ["font"],
///   expandInitialValues: false,
/// }
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DecoderOptions {
  /// Shorthands left undecoded, by property name.
  pub disabled_shorthands: Vec<String>,
  /// Fill the longhands a declaration leaves unset with their initial values.
  pub expand_initial_values: bool,
}

impl Default for DecoderOptions {
  fn default() -> Self {
    DecoderOptions {
      disabled_shorthands: Vec::new(),
      expand_initial_values: true,
    }
  }
}

impl DecoderOptions {
  pub fn from_json5(raw: &str) -> Result<Self, DecoderError> {
    Ok(serde_json5::from_str(raw)?)
  }
}
