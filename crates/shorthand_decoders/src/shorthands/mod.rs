use shorthand_variator::{Defaults, ShorthandGrammar, Variator, VariatorError};

use crate::decoder::Shorthand;
use crate::property::{CssDeclaration, CssDecoded, CssProperty};

pub mod background;
pub mod border;
pub mod box_shadow;
pub mod font;
pub mod font_family;
pub mod list_style;
pub mod outline;

pub use background::Background;
pub use border::{Border, BorderSide};
pub use box_shadow::BoxShadow;
pub use font::Font;
pub use font_family::FontFamily;
pub use list_style::ListStyle;
pub use outline::Outline;

/// Every shorthand with a bundled strategy.
pub const NAMES: &[&str] = &[
  "border",
  "border-top",
  "border-right",
  "border-bottom",
  "border-left",
  "outline",
  "list-style",
  "font",
  "font-family",
  "box-shadow",
  "background",
];

pub fn all() -> Result<Vec<Box<dyn Shorthand>>, VariatorError> {
  let mut shorthands: Vec<Box<dyn Shorthand>> = vec![Box::new(Border::new()?)];
  for side in crate::defaults::BORDER_SIDES {
    shorthands.push(Box::new(BorderSide::new(side)?));
  }
  shorthands.push(Box::new(Outline::new()?));
  shorthands.push(Box::new(ListStyle::new()?));
  shorthands.push(Box::new(Font::new()?));
  shorthands.push(Box::new(FontFamily::new()?));
  shorthands.push(Box::new(BoxShadow::new()?));
  shorthands.push(Box::new(Background::new()?));
  Ok(shorthands)
}

/// Runs the greedy match over the whole declaration.
pub(crate) fn vary<G: ShorthandGrammar<CssProperty>>(
  variator: &Variator<CssProperty, G>,
  declaration: &CssDeclaration,
  defaults: Option<&dyn Defaults<CssProperty>>,
) -> Option<CssDecoded> {
  if declaration.is_empty() {
    return None;
  }

  let mut decoded = CssDecoded::new();
  if !variator.vary(declaration.terms(), &mut decoded) {
    return None;
  }
  Some(over_defaults(variator, defaults, decoded))
}

/// Lays `decoded` over the initial values of the variator's longhands.
pub(crate) fn over_defaults<G: ShorthandGrammar<CssProperty>>(
  variator: &Variator<CssProperty, G>,
  defaults: Option<&dyn Defaults<CssProperty>>,
  decoded: CssDecoded,
) -> CssDecoded {
  let Some(defaults) = defaults else {
    return decoded;
  };

  let mut out = CssDecoded::new();
  variator.assign_defaults(defaults, &mut out);
  out.merge(decoded);
  out
}
