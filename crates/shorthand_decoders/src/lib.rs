//! Decoders for common shorthand style properties, built on
//! [`shorthand_variator`].
//!
//! ```
//! use shorthand_decoders::{CssDeclaration, DecoderOptions, ShorthandDecoder};
//! use shorthand_variator::{LengthUnit, Separator, Term};
//!
//! let decoder = ShorthandDecoder::new(DecoderOptions::default()).unwrap();
//! let declaration = CssDeclaration::new(
//!   "border-top",
//!   vec![
//!     Term::length(1.0, LengthUnit::Px),
//!     Term::ident("solid").with_separator(Separator::Space),
//!   ],
//! );
//!
//! let decoded = decoder.decode(&declaration).unwrap();
//! assert_eq!(
//!   decoded.value("border-top-width"),
//!   Some(&Term::length(1.0, LengthUnit::Px))
//! );
//! ```

mod decoder;
mod defaults;
mod error;
mod options;
mod property;
pub mod shorthands;
pub mod values;

#[cfg(test)]
mod test_utils;

pub use decoder::{Shorthand, ShorthandDecoder};
pub use defaults::{CssDefaults, BORDER_SIDES};
pub use error::DecoderError;
pub use options::DecoderOptions;
pub use property::{
  CssDeclaration, CssDecoded, CssProperty, CssTerm, PropertyClass, PropertyValue,
};
