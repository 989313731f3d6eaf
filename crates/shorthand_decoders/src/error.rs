use shorthand_variator::VariatorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecoderError {
  #[error(transparent)]
  Variator(#[from] VariatorError),
  #[error("Invalid decoder options: {0}")]
  Options(#[from] serde_json5::Error),
  #[error("Unknown shorthand property {name}")]
  UnknownShorthand { name: String },
}
