use std::cell::Cell;
use std::fmt;

use crate::decoded::Decoded;
use crate::defaults::Defaults;
use crate::grammar::{Matched, ShorthandGrammar};
use crate::property::{Property, ValueType};
use crate::session::Session;
use crate::term::{Separator, Term, TermValue};
use crate::variant::VariantTable;
use crate::variator::Variator;

pub const BORDER_WIDTH: usize = 0;
pub const BORDER_STYLE: usize = 1;
pub const BORDER_COLOR: usize = 2;

pub const FONT_SIZE: usize = 0;
pub const LINE_HEIGHT: usize = 1;
pub const FONT_FAMILY: usize = 2;

pub const LAYER_IMAGE: usize = 0;
pub const LAYER_REPEAT: usize = 1;
pub const LAYER_POSITION: usize = 2;
pub const LAYER_COLOR: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestClass {
  Width,
  Style,
  Color,
  Size,
  LineHeight,
  Family,
  Image,
  Repeat,
  Position,
  NoInherit,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TestValue {
  Inherit,
  Keyword(&'static str),
  Value,
  ListValues,
  NestedList,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TestProperty {
  pub class: TestClass,
  pub value: TestValue,
}

impl TestProperty {
  pub fn keyword(class: TestClass, keyword: &'static str) -> Self {
    TestProperty {
      class,
      value: TestValue::Keyword(keyword),
    }
  }

  pub fn value(class: TestClass) -> Self {
    TestProperty {
      class,
      value: TestValue::Value,
    }
  }

  pub fn list_values(class: TestClass) -> Self {
    TestProperty {
      class,
      value: TestValue::ListValues,
    }
  }

  pub fn inherit_of(class: TestClass) -> Self {
    TestProperty {
      class,
      value: TestValue::Inherit,
    }
  }
}

impl Property for TestProperty {
  type Class = TestClass;

  fn class(&self) -> TestClass {
    self.class
  }

  fn value_type(&self) -> ValueType {
    match self.class {
      TestClass::Image | TestClass::Repeat | TestClass::Position => ValueType::List,
      _ => ValueType::Simple,
    }
  }

  fn inherit(class: TestClass) -> Option<Self> {
    match class {
      TestClass::NoInherit => None,
      class => Some(TestProperty::inherit_of(class)),
    }
  }

  fn nested_list(class: TestClass) -> Self {
    TestProperty {
      class,
      value: TestValue::NestedList,
    }
  }
}

impl fmt::Display for TestProperty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.value {
      TestValue::Keyword(keyword) => f.write_str(keyword),
      value => write!(f, "{:?}", value),
    }
  }
}

/// Gives every term but the first a space separator, like a tokenizer would.
pub fn spaced(mut terms: Vec<Term<TestProperty>>) -> Vec<Term<TestProperty>> {
  for term in terms.iter_mut().skip(1) {
    if term.separator.is_none() {
      term.set_separator(Some(Separator::Space));
    }
  }
  terms
}

fn keyword_in(term: &Term<TestProperty>, keywords: &[&'static str]) -> Option<&'static str> {
  let ident = term.as_ident()?;
  keywords
    .iter()
    .copied()
    .find(|keyword| keyword.eq_ignore_ascii_case(ident))
}

const STYLES: &[&str] = &[
  "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];
const COLORS: &[&str] = &["red", "green", "blue", "black", "transparent"];

fn color(term: &Term<TestProperty>) -> Option<Matched<TestProperty>> {
  keyword_in(term, COLORS).map(|_| Matched::value(TestProperty::value(TestClass::Color), term.clone()))
}

pub struct BorderGrammar;

impl ShorthandGrammar<TestProperty> for BorderGrammar {
  fn variant(
    &self,
    variant: usize,
    session: &Session<'_, TestProperty>,
    index: usize,
  ) -> Option<Matched<TestProperty>> {
    let term = session.term(index)?;
    match variant {
      BORDER_WIDTH => match &term.value {
        TermValue::Length(..) => Some(Matched::value(
          TestProperty::value(TestClass::Width),
          term.clone(),
        )),
        _ => keyword_in(term, &["thin", "medium", "thick"])
          .map(|keyword| Matched::keyword(TestProperty::keyword(TestClass::Width, keyword))),
      },
      BORDER_STYLE => keyword_in(term, STYLES)
        .map(|keyword| Matched::keyword(TestProperty::keyword(TestClass::Style, keyword))),
      BORDER_COLOR => color(term),
      _ => None,
    }
  }
}

pub fn border_variator() -> Variator<TestProperty, BorderGrammar> {
  Variator::new(border_table(), BorderGrammar)
}

fn border_table() -> VariantTable<TestProperty> {
  VariantTable::builder()
    .variant("border-width", TestClass::Width)
    .variant("border-style", TestClass::Style)
    .variant("border-color", TestClass::Color)
    .build()
    .unwrap()
}

/// Counts every predicate call of the wrapped grammar.
pub struct Counting<'a, G> {
  inner: G,
  calls: &'a Cell<usize>,
}

impl<G: ShorthandGrammar<TestProperty>> ShorthandGrammar<TestProperty> for Counting<'_, G> {
  fn variant(
    &self,
    variant: usize,
    session: &Session<'_, TestProperty>,
    index: usize,
  ) -> Option<Matched<TestProperty>> {
    self.calls.set(self.calls.get() + 1);
    self.inner.variant(variant, session, index)
  }
}

pub fn counting_border_variator(
  calls: &Cell<usize>,
) -> Variator<TestProperty, Counting<'_, BorderGrammar>> {
  Variator::new(
    border_table(),
    Counting {
      inner: BorderGrammar,
      calls,
    },
  )
}

/// `thin` is acceptable both as a width and as a style.
pub struct AmbiguousGrammar;

impl ShorthandGrammar<TestProperty> for AmbiguousGrammar {
  fn variant(
    &self,
    variant: usize,
    session: &Session<'_, TestProperty>,
    index: usize,
  ) -> Option<Matched<TestProperty>> {
    let term = session.term(index)?;
    match variant {
      BORDER_WIDTH => match &term.value {
        TermValue::Length(..) => Some(Matched::value(
          TestProperty::value(TestClass::Width),
          term.clone(),
        )),
        _ => keyword_in(term, &["thin"])
          .map(|keyword| Matched::keyword(TestProperty::keyword(TestClass::Width, keyword))),
      },
      BORDER_STYLE => keyword_in(term, &["thin"])
        .map(|keyword| Matched::keyword(TestProperty::keyword(TestClass::Style, keyword))),
      _ => None,
    }
  }
}

pub fn ambiguous_variator() -> Variator<TestProperty, AmbiguousGrammar> {
  let table = VariantTable::builder()
    .variant("border-width", TestClass::Width)
    .variant("border-style", TestClass::Style)
    .build()
    .unwrap();
  Variator::new(table, AmbiguousGrammar)
}

pub struct FontGrammar;

impl ShorthandGrammar<TestProperty> for FontGrammar {
  fn variant(
    &self,
    variant: usize,
    session: &Session<'_, TestProperty>,
    index: usize,
  ) -> Option<Matched<TestProperty>> {
    let term = session.term(index)?;
    match (variant, &term.value) {
      (FONT_SIZE, TermValue::Length(..)) => Some(Matched::value(
        TestProperty::value(TestClass::Size),
        term.clone(),
      )),
      (LINE_HEIGHT, TermValue::Length(..) | TermValue::Number(_)) => Some(Matched::value(
        TestProperty::value(TestClass::LineHeight),
        term.clone(),
      )),
      (FONT_FAMILY, TermValue::String(_)) => Some(Matched::value(
        TestProperty::value(TestClass::Family),
        term.clone(),
      )),
      (FONT_FAMILY, TermValue::Ident(_)) => {
        keyword_in(term, &["serif", "sans-serif", "monospace", "cursive", "fantasy"])
          .map(|keyword| Matched::keyword(TestProperty::keyword(TestClass::Family, keyword)))
      }
      _ => None,
    }
  }

  fn variant_condition(
    &self,
    variant: usize,
    session: &Session<'_, TestProperty>,
    index: usize,
  ) -> bool {
    let slashed = session
      .term(index)
      .is_some_and(|term| term.separator == Some(Separator::Slash));
    match variant {
      FONT_SIZE => !slashed,
      LINE_HEIGHT => slashed && session.passed(FONT_SIZE),
      FONT_FAMILY => !slashed && session.passed(FONT_SIZE),
      _ => false,
    }
  }
}

pub fn font_variator() -> Variator<TestProperty, FontGrammar> {
  let table = VariantTable::builder()
    .variant("font-size", TestClass::Size)
    .variant("line-height", TestClass::LineHeight)
    .variant("font-family", TestClass::Family)
    .build()
    .unwrap();
  Variator::new(table, FontGrammar)
}

/// A background-like layer: image, repeat, a one or two term position and a
/// color that is only allowed in the last layer. At most three layers. An
/// image without a repeat is not repeated.
pub struct LayerGrammar;

impl ShorthandGrammar<TestProperty> for LayerGrammar {
  fn variant(
    &self,
    variant: usize,
    session: &Session<'_, TestProperty>,
    index: usize,
  ) -> Option<Matched<TestProperty>> {
    let term = session.term(index)?;
    match variant {
      LAYER_IMAGE => match &term.value {
        TermValue::Uri(_) => Some(Matched::value(
          TestProperty::value(TestClass::Image),
          term.clone(),
        )),
        _ => keyword_in(term, &["none"])
          .map(|keyword| Matched::keyword(TestProperty::keyword(TestClass::Image, keyword))),
      },
      LAYER_REPEAT => keyword_in(term, &["repeat", "repeat-x", "repeat-y", "no-repeat"])
        .map(|keyword| Matched::keyword(TestProperty::keyword(TestClass::Repeat, keyword))),
      LAYER_POSITION => {
        if !matches!(term.value, TermValue::Percent(_)) {
          return None;
        }
        let mut items = vec![term.without_separator()];
        if let Some(next) = session.term(index + 1).filter(|next| {
          next.separator == Some(Separator::Space) && matches!(next.value, TermValue::Percent(_))
        }) {
          items.push(next.clone());
        }
        let consumed = items.len();
        Some(
          Matched::value(
            TestProperty::list_values(TestClass::Position),
            Term::list(items),
          )
          .consuming(consumed),
        )
      }
      LAYER_COLOR => color(term),
      _ => None,
    }
  }

  fn complete_list_item(
    &self,
    session: &Session<'_, TestProperty>,
    layer: &mut Decoded<TestProperty>,
  ) {
    if session.passed(LAYER_IMAGE) && !session.passed(LAYER_REPEAT) {
      layer.set(
        "repeat",
        TestProperty::keyword(TestClass::Repeat, "no-repeat"),
        None,
      );
    }
  }

  fn validate_list_item(
    &self,
    index: usize,
    size: usize,
    session: &Session<'_, TestProperty>,
    _layer: &Decoded<TestProperty>,
  ) -> bool {
    index + 1 == size || !session.passed(LAYER_COLOR)
  }

  fn validate_list(&self, size: usize, _decoded: &Decoded<TestProperty>) -> bool {
    size <= 3
  }
}

pub fn layer_variator() -> Variator<TestProperty, LayerGrammar> {
  let table = VariantTable::builder()
    .variant("image", TestClass::Image)
    .variant("repeat", TestClass::Repeat)
    .variant("position", TestClass::Position)
    .variant("color", TestClass::Color)
    .build()
    .unwrap();
  Variator::new(table, LayerGrammar)
}

pub struct TestDefaults;

impl Defaults<TestProperty> for TestDefaults {
  fn default_property(&self, name: &str) -> Option<TestProperty> {
    Some(match name {
      "border-width" => TestProperty::keyword(TestClass::Width, "medium"),
      "border-style" => TestProperty::keyword(TestClass::Style, "none"),
      "border-color" | "color" => TestProperty::value(TestClass::Color),
      "image" => TestProperty::keyword(TestClass::Image, "none"),
      "repeat" => TestProperty::keyword(TestClass::Repeat, "repeat"),
      "position" => TestProperty::list_values(TestClass::Position),
      _ => return None,
    })
  }

  fn default_value(&self, name: &str) -> Option<Term<TestProperty>> {
    match name {
      "border-color" => Some(Term::ident("black")),
      "color" => Some(Term::ident("transparent")),
      "position" => Some(Term::list(vec![
        Term::percent(0.0),
        Term::percent(0.0).with_separator(Separator::Space),
      ])),
      _ => None,
    }
  }
}
