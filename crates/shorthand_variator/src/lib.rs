//! Greedy term-to-variant matching for shorthand style declarations.
//!
//! A shorthand such as `border: 1px solid blue` is decoded by assigning each
//! of its terms to one of the shorthand's variants (`border-width`,
//! `border-style`, `border-color`). The [`Variator`] drives the assignment; a
//! [`ShorthandGrammar`] supplies the per-variant predicates.
//!
//! Comma-separated values are decoded either as flat lists of one variant
//! ([`Variator::try_list_of_one_term_variant`],
//! [`Variator::try_list_of_multi_term_variant`]) or as layers that each run
//! the full greedy match ([`Variator::vary_list`]).

mod declaration;
mod decoded;
mod defaults;
mod error;
mod grammar;
mod property;
mod session;
mod term;
mod variant;
mod variator;

#[cfg(test)]
mod test_utils;

pub use declaration::Declaration;
pub use decoded::Decoded;
pub use defaults::{Defaults, NoDefaults};
pub use error::VariatorError;
pub use grammar::{Matched, ShorthandGrammar};
pub use property::{Property, ValueType};
pub use session::Session;
pub use term::{LengthUnit, Separator, Term, TermValue, INHERIT_KEYWORD};
pub use variant::{Variant, VariantTable, VariantTableBuilder};
pub use variator::{InheritScope, Variator};
