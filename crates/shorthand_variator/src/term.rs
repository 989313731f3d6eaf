use std::fmt;

use csscolorparser::Color;

/// The keyword which may only ever appear as the sole term of a declaration.
pub const INHERIT_KEYWORD: &str = "inherit";

/// Syntactic joiner written before a term, relative to the term preceding it.
///
/// The first term of a sequence carries no separator at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Separator {
  Space,
  Comma,
  Slash,
}

impl Separator {
  fn as_str(&self) -> &'static str {
    match self {
      Separator::Space => " ",
      Separator::Comma => ", ",
      Separator::Slash => "/",
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthUnit {
  Px,
  Em,
  Rem,
  Ex,
  Ch,
  Vw,
  Vh,
  Vmin,
  Vmax,
  Pt,
  Pc,
  Cm,
  Mm,
  In,
  Q,
}

impl LengthUnit {
  pub fn as_str(&self) -> &'static str {
    match self {
      LengthUnit::Px => "px",
      LengthUnit::Em => "em",
      LengthUnit::Rem => "rem",
      LengthUnit::Ex => "ex",
      LengthUnit::Ch => "ch",
      LengthUnit::Vw => "vw",
      LengthUnit::Vh => "vh",
      LengthUnit::Vmin => "vmin",
      LengthUnit::Vmax => "vmax",
      LengthUnit::Pt => "pt",
      LengthUnit::Pc => "pc",
      LengthUnit::Cm => "cm",
      LengthUnit::Mm => "mm",
      LengthUnit::In => "in",
      LengthUnit::Q => "Q",
    }
  }
}

/// The payload of a [`Term`].
///
/// `P` is the property kind type, needed because a decoded list entry pairs a
/// property kind with the term it was decoded from.
#[derive(Clone, Debug, PartialEq)]
pub enum TermValue<P> {
  Ident(String),
  String(String),
  Number(f32),
  Length(f32, LengthUnit),
  Percent(f32),
  Color(Color),
  Uri(String),
  Function { name: String, args: Vec<Term<P>> },
  List(Vec<Term<P>>),
  Property(P, Option<Box<Term<P>>>),
}

/// Smallest value unit of a declaration, e.g. `1px`, `solid` or `url(a.png)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Term<P> {
  pub separator: Option<Separator>,
  pub value: TermValue<P>,
}

impl<P> Term<P> {
  pub fn new(value: TermValue<P>) -> Self {
    Term {
      separator: None,
      value,
    }
  }

  pub fn ident(value: impl Into<String>) -> Self {
    Term::new(TermValue::Ident(value.into()))
  }

  pub fn string(value: impl Into<String>) -> Self {
    Term::new(TermValue::String(value.into()))
  }

  pub fn number(value: f32) -> Self {
    Term::new(TermValue::Number(value))
  }

  pub fn length(value: f32, unit: LengthUnit) -> Self {
    Term::new(TermValue::Length(value, unit))
  }

  pub fn percent(value: f32) -> Self {
    Term::new(TermValue::Percent(value))
  }

  pub fn color(value: Color) -> Self {
    Term::new(TermValue::Color(value))
  }

  pub fn uri(value: impl Into<String>) -> Self {
    Term::new(TermValue::Uri(value.into()))
  }

  pub fn function(name: impl Into<String>, args: Vec<Term<P>>) -> Self {
    Term::new(TermValue::Function {
      name: name.into(),
      args,
    })
  }

  pub fn list(items: Vec<Term<P>>) -> Self {
    Term::new(TermValue::List(items))
  }

  /// A decoded `(kind, value)` pair, used as an entry of list-valued longhands.
  pub fn property_value(property: P, value: Option<Term<P>>) -> Self {
    Term::new(TermValue::Property(property, value.map(Box::new)))
  }

  pub fn with_separator(mut self, separator: Separator) -> Self {
    self.separator = Some(separator);
    self
  }

  pub fn set_separator(&mut self, separator: Option<Separator>) {
    self.separator = separator;
  }

  pub fn as_ident(&self) -> Option<&str> {
    match &self.value {
      TermValue::Ident(ident) => Some(ident.as_str()),
      _ => None,
    }
  }

  pub fn is_ident(&self, expected: &str) -> bool {
    self
      .as_ident()
      .is_some_and(|ident| ident.eq_ignore_ascii_case(expected))
  }

  pub fn is_inherit(&self) -> bool {
    self.is_ident(INHERIT_KEYWORD)
  }

  pub fn as_list(&self) -> Option<&[Term<P>]> {
    match &self.value {
      TermValue::List(items) => Some(items.as_slice()),
      _ => None,
    }
  }
}

impl<P: Clone> Term<P> {
  /// Shallow copy of this term with the separator cleared, used when a term is
  /// repackaged into a new list.
  pub fn without_separator(&self) -> Self {
    Term {
      separator: None,
      value: self.value.clone(),
    }
  }
}

impl<P: fmt::Display> Term<P> {
  /// Writes the value alone, without the leading separator.
  fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.value {
      TermValue::Ident(ident) => f.write_str(ident),
      TermValue::String(value) => write!(f, "\"{}\"", value.replace('"', "\\\"")),
      TermValue::Number(value) => write!(f, "{value}"),
      TermValue::Length(value, unit) => write!(f, "{value}{}", unit.as_str()),
      TermValue::Percent(value) => write!(f, "{value}%"),
      TermValue::Color(color) => f.write_str(&color.to_hex_string()),
      TermValue::Uri(uri) => write!(f, "url({uri})"),
      TermValue::Function { name, args } => {
        write!(f, "{name}(")?;
        write_terms(f, args)?;
        f.write_str(")")
      }
      TermValue::List(items) => write_terms(f, items),
      TermValue::Property(property, value) => {
        write!(f, "{property}")?;
        if let Some(value) = value {
          f.write_str("=")?;
          value.fmt_value(f)?;
        }
        Ok(())
      }
    }
  }
}

impl<P: fmt::Display> fmt::Display for Term<P> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some(separator) = &self.separator {
      f.write_str(separator.as_str())?;
    }
    self.fmt_value(f)
  }
}

fn write_terms<P: fmt::Display>(f: &mut fmt::Formatter<'_>, terms: &[Term<P>]) -> fmt::Result {
  for (index, term) in terms.iter().enumerate() {
    // A leading term inside a container never prints its separator.
    if index == 0 {
      term.fmt_value(f)?;
    } else {
      write!(f, "{term}")?;
    }
  }
  Ok(())
}
