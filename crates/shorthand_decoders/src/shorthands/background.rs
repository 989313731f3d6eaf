use shorthand_variator::{
  Decoded, Defaults, Matched, Separator, Session, ShorthandGrammar, VariantTable, Variator,
  VariatorError,
};

use crate::decoder::Shorthand;
use crate::defaults::CssDefaults;
use crate::property::{
  CssDeclaration, CssDecoded, CssProperty, CssTerm, PropertyClass, PropertyValue,
};
use crate::values;

pub const COLOR: usize = 0;
pub const IMAGE: usize = 1;
pub const REPEAT: usize = 2;
pub const ATTACHMENT: usize = 3;
pub const POSITION: usize = 4;
pub const SIZE: usize = 5;
pub const ORIGIN: usize = 6;
pub const CLIP: usize = 7;

const REPEATS: &[&str] = &["repeat", "repeat-x", "repeat-y", "no-repeat", "space", "round"];
const ATTACHMENTS: &[&str] = &["scroll", "fixed", "local"];
const BOXES: &[&str] = &["border-box", "padding-box", "content-box"];

#[derive(Clone, Copy, Debug, PartialEq)]
enum Axis {
  Horizontal,
  Vertical,
  Either,
}

fn position_axis(term: &CssTerm) -> Option<Axis> {
  if values::is_length_or_percentage(term) {
    return Some(Axis::Either);
  }
  match values::keyword(term, &["left", "right", "top", "bottom", "center"])? {
    "left" | "right" => Some(Axis::Horizontal),
    "top" | "bottom" => Some(Axis::Vertical),
    _ => Some(Axis::Either),
  }
}

/// Whether two position components form a valid pair. Lengths are only
/// allowed as `horizontal vertical`; keywords may be swapped.
fn position_pair(first: &CssTerm, second: &CssTerm) -> bool {
  let (Some(a), Some(b)) = (position_axis(first), position_axis(second)) else {
    return false;
  };
  let in_order = a != Axis::Vertical && b != Axis::Horizontal;
  let keywords = first.as_ident().is_some() && second.as_ident().is_some();

  in_order || (keywords && a != Axis::Horizontal && b != Axis::Vertical)
}

/// Whether `terms` form a three or four value position: two `edge offset?`
/// groups on different axes, where `center` takes no offset.
fn edge_offsets(terms: &[&CssTerm]) -> bool {
  let mut axes = Vec::with_capacity(2);
  let mut rest = terms;

  while let Some((edge, tail)) = rest.split_first() {
    let Some(keyword) = values::keyword(edge, &["left", "right", "top", "bottom", "center"]) else {
      return false;
    };
    rest = tail;
    if keyword != "center" {
      if let Some((_, tail)) = rest
        .split_first()
        .filter(|(offset, _)| values::is_length_or_percentage(offset))
      {
        rest = tail;
      }
    }
    axes.push(position_axis(edge));
  }

  match axes.as_slice() {
    [Some(a), Some(b)] => !matches!(
      (a, b),
      (Axis::Horizontal, Axis::Horizontal) | (Axis::Vertical, Axis::Vertical)
    ),
    _ => false,
  }
}

/// Collects one or two space separated terms accepted by `component`,
/// starting at `index`.
fn pair_list(
  session: &Session<'_, CssProperty>,
  index: usize,
  component: impl Fn(&CssTerm) -> bool,
  pair: impl Fn(&CssTerm, &CssTerm) -> bool,
) -> Option<Vec<CssTerm>> {
  let first = session.term(index).filter(|term| component(term))?;
  let mut items = vec![first.without_separator()];

  if let Some(second) = session.term(index + 1) {
    if second.separator == Some(Separator::Space) && component(second) && pair(first, second) {
      items.push(second.clone());
    }
  }

  Some(items)
}

fn list_values(class: PropertyClass, items: Vec<CssTerm>) -> Matched<CssProperty> {
  let consumed = items.len();
  Matched::value(
    CssProperty::new(class, PropertyValue::ListValues),
    CssTerm::list(items),
  )
  .consuming(consumed)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BackgroundGrammar;

impl BackgroundGrammar {
  fn image(term: &CssTerm) -> Option<Matched<CssProperty>> {
    let class = PropertyClass::BackgroundImage;
    if values::is_uri(term) {
      Some(values::valued(class, PropertyValue::Uri, term))
    } else if values::is_gradient(term) {
      Some(values::valued(class, PropertyValue::Gradient, term))
    } else {
      values::keyword_of(class, term, &["none"])
    }
  }

  fn position(session: &Session<'_, CssProperty>, index: usize) -> Option<Matched<CssProperty>> {
    let mut run: Vec<&CssTerm> = Vec::with_capacity(4);
    for (offset, term) in session.terms().iter().skip(index).take(4).enumerate() {
      if (offset > 0 && term.separator != Some(Separator::Space)) || position_axis(term).is_none()
      {
        break;
      }
      run.push(term);
    }

    for len in [4, 3] {
      let Some(terms) = run.get(..len) else {
        continue;
      };
      if edge_offsets(terms) {
        let items = terms
          .iter()
          .enumerate()
          .map(|(offset, term)| {
            if offset == 0 {
              term.without_separator()
            } else {
              (*term).clone()
            }
          })
          .collect();
        return Some(list_values(PropertyClass::BackgroundPosition, items));
      }
    }

    let items = pair_list(
      session,
      index,
      |term| position_axis(term).is_some(),
      position_pair,
    )?;
    Some(list_values(PropertyClass::BackgroundPosition, items))
  }

  fn size(session: &Session<'_, CssProperty>, index: usize) -> Option<Matched<CssProperty>> {
    let term = session.term(index)?;
    if let Some(keyword) = values::keyword(term, &["cover", "contain"]) {
      return Some(Matched::keyword(CssProperty::keyword(
        PropertyClass::BackgroundSize,
        keyword,
      )));
    }

    let component = |term: &CssTerm| {
      values::is_length_or_percentage(term) || values::keyword(term, &["auto"]).is_some()
    };
    let items = pair_list(session, index, component, |_, _| true)?;
    Some(list_values(PropertyClass::BackgroundSize, items))
  }
}

impl ShorthandGrammar<CssProperty> for BackgroundGrammar {
  fn variant(
    &self,
    variant: usize,
    session: &Session<'_, CssProperty>,
    index: usize,
  ) -> Option<Matched<CssProperty>> {
    let term = session.term(index)?;
    match variant {
      COLOR => values::color(PropertyClass::BackgroundColor, term),
      IMAGE => Self::image(term),
      REPEAT => values::keyword_of(PropertyClass::BackgroundRepeat, term, REPEATS),
      ATTACHMENT => values::keyword_of(PropertyClass::BackgroundAttachment, term, ATTACHMENTS),
      POSITION => Self::position(session, index),
      SIZE => Self::size(session, index),
      ORIGIN => values::keyword_of(PropertyClass::BackgroundOrigin, term, BOXES),
      CLIP => values::keyword_of(PropertyClass::BackgroundClip, term, BOXES),
      _ => None,
    }
  }

  fn variant_condition(
    &self,
    variant: usize,
    session: &Session<'_, CssProperty>,
    index: usize,
  ) -> bool {
    let slashed = session
      .term(index)
      .is_some_and(|term| term.separator == Some(Separator::Slash));

    match variant {
      // the size directly follows the position, after a slash
      SIZE => {
        slashed
          && session.passed(POSITION)
          && index
            .checked_sub(1)
            .and_then(|previous| session.term(previous))
            .is_some_and(|previous| position_axis(previous).is_some())
      }
      CLIP => !slashed && session.passed(ORIGIN),
      _ => !slashed,
    }
  }

  fn complete_list_item(
    &self,
    session: &Session<'_, CssProperty>,
    layer: &mut Decoded<CssProperty>,
  ) {
    // a single box sets both the origin and the clip
    if !session.passed(ORIGIN) || session.passed(CLIP) {
      return;
    }
    let Some(origin) = layer.property("background-origin") else {
      return;
    };

    let clip = CssProperty::new(PropertyClass::BackgroundClip, origin.value.clone());
    let value = layer.value("background-origin").cloned();
    layer.set("background-clip", clip, value);
  }

  fn validate_list_item(
    &self,
    index: usize,
    size: usize,
    session: &Session<'_, CssProperty>,
    _layer: &Decoded<CssProperty>,
  ) -> bool {
    // only the final layer may carry a color
    index + 1 == size || !session.passed(COLOR)
  }
}

/// `background`: comma separated layers of image, repeat, attachment,
/// position, size and boxes, with the color allowed in the final layer only.
///
/// Layers always start from the initial values, so every longhand is set
/// whether or not initial values are requested.
pub struct Background {
  variator: Variator<CssProperty, BackgroundGrammar>,
}

impl Background {
  pub fn new() -> Result<Self, VariatorError> {
    let table = VariantTable::builder()
      .variant("background-color", PropertyClass::BackgroundColor)
      .variant("background-image", PropertyClass::BackgroundImage)
      .variant("background-repeat", PropertyClass::BackgroundRepeat)
      .variant("background-attachment", PropertyClass::BackgroundAttachment)
      .variant("background-position", PropertyClass::BackgroundPosition)
      .variant("background-size", PropertyClass::BackgroundSize)
      .variant("background-origin", PropertyClass::BackgroundOrigin)
      .variant("background-clip", PropertyClass::BackgroundClip)
      .build()?;

    Ok(Background {
      variator: Variator::new(table, BackgroundGrammar),
    })
  }
}

impl Shorthand for Background {
  fn name(&self) -> &str {
    "background"
  }

  fn longhands(&self) -> Vec<&str> {
    self.variator.table().names().collect()
  }

  fn decode(
    &self,
    declaration: &CssDeclaration,
    defaults: Option<&dyn Defaults<CssProperty>>,
  ) -> Option<CssDecoded> {
    let defaults: &dyn Defaults<CssProperty> = match defaults {
      Some(defaults) => defaults,
      None => &CssDefaults,
    };

    let mut decoded = CssDecoded::new();
    if !self.variator.vary_list(declaration, defaults, &mut decoded) {
      return None;
    }
    Some(decoded)
  }
}
