use crate::declaration::Declaration;
use crate::decoded::Decoded;
use crate::defaults::Defaults;
use crate::grammar::{Matched, ShorthandGrammar};
use crate::property::{Property, ValueType};
use crate::session::Session;
use crate::term::{Separator, Term};
use crate::variant::{Variant, VariantTable};

/// Which longhands an `inherit` keyword applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InheritScope {
  All,
  Variant(usize),
}

/// Greedy term-to-variant matching engine.
///
/// Terms are assigned to variants in a single backtrack-free pass: for every
/// term the variants are tried in ordinal order and the first one accepting
/// it wins. A variant may match at most once per pass, and the pass fails as
/// soon as a term is left without a variant.
///
/// All entry points return `true` on success and only then write to `out`;
/// a failed decode leaves `out` untouched.
#[derive(Clone, Debug)]
pub struct Variator<P: Property, G> {
  table: VariantTable<P>,
  grammar: G,
}

impl<P: Property, G: ShorthandGrammar<P>> Variator<P, G> {
  pub fn new(table: VariantTable<P>, grammar: G) -> Self {
    Variator { table, grammar }
  }

  pub fn table(&self) -> &VariantTable<P> {
    &self.table
  }

  /// Applies `inherit` when `term` is the `inherit` keyword.
  pub fn check_inherit(&self, scope: InheritScope, term: &Term<P>, out: &mut Decoded<P>) -> bool {
    if !term.is_inherit() {
      return false;
    }

    match scope {
      InheritScope::All => {
        for variant in self.table.iter() {
          out.set(variant.name.clone(), variant.inherit().clone(), None);
        }
      }
      InheritScope::Variant(index) => {
        let Some(variant) = self.table.get(index) else {
          return false;
        };
        out.set(variant.name.clone(), variant.inherit().clone(), None);
      }
    }

    true
  }

  /// Seeds `out` with the defaults of every configured longhand.
  pub fn assign_defaults(&self, defaults: &dyn Defaults<P>, out: &mut Decoded<P>) {
    for name in self.table.names() {
      if let Some(property) = defaults.default_property(name) {
        out.set_property(name, property);
      }
      if let Some(value) = defaults.default_value(name) {
        out.values.insert(name.to_string(), value);
      }
    }
  }

  /// Assigns every term to a distinct variant.
  #[must_use]
  pub fn vary(&self, terms: &[Term<P>], out: &mut Decoded<P>) -> bool {
    if terms.len() == 1 && self.check_inherit(InheritScope::All, &terms[0], out) {
      return true;
    }

    let mut session = Session::new(terms, self.table.len());
    let mut scratch = Decoded::new();
    if !self.scan(&mut session, &mut scratch) {
      return false;
    }

    out.merge(scratch);
    true
  }

  /// Decodes a declaration made of exactly one term as `variant`.
  #[must_use]
  pub fn try_one_term_variant(
    &self,
    variant: usize,
    declaration: &Declaration<P>,
    out: &mut Decoded<P>,
  ) -> bool {
    if declaration.len() != 1 {
      return false;
    }
    if self.check_inherit(InheritScope::Variant(variant), &declaration.terms[0], out) {
      return true;
    }

    self.try_whole(variant, declaration.terms(), out)
  }

  /// Decodes all of `terms` as the single value of `variant`.
  ///
  /// Only one such multi-term variant should exist per table, conventionally
  /// the last one.
  #[must_use]
  pub fn try_multi_term_variant(
    &self,
    variant: usize,
    terms: &[Term<P>],
    out: &mut Decoded<P>,
  ) -> bool {
    if terms.len() == 1 && self.check_inherit(InheritScope::Variant(variant), &terms[0], out) {
      return true;
    }

    self.try_whole(variant, terms, out)
  }

  /// Decodes a comma-separated list of single terms, each as `variant`.
  ///
  /// The longhand ends up with `list_marker` as its kind and the list of
  /// decoded `(kind, value)` pairs as its value.
  #[must_use]
  pub fn try_list_of_one_term_variant(
    &self,
    variant: usize,
    declaration: &Declaration<P>,
    list_marker: P,
    out: &mut Decoded<P>,
  ) -> bool {
    if declaration.len() == 1
      && self.check_inherit(InheritScope::Variant(variant), &declaration.terms[0], out)
    {
      return true;
    }
    let Some(entry) = self.list_target(variant, declaration) else {
      return false;
    };

    let mut items = Vec::with_capacity(declaration.len());
    for (index, term) in declaration.terms.iter().enumerate() {
      let expected = if index == 0 {
        None
      } else {
        Some(Separator::Comma)
      };
      if term.separator != expected {
        tracing::trace!(
          property = %entry.name,
          index,
          separator = ?term.separator,
          "List items must be separated by commas"
        );
        return false;
      }

      let Some(matched) = self.attempt(variant, std::slice::from_ref(term)) else {
        return false;
      };
      items.push(list_entry(matched, index == 0));
    }

    out.set(entry.name.clone(), list_marker, Some(Term::list(items)));
    true
  }

  /// Decodes a comma-separated list of space-separated values, each segment
  /// as one multi-term attempt of `variant`.
  #[must_use]
  pub fn try_list_of_multi_term_variant(
    &self,
    variant: usize,
    declaration: &Declaration<P>,
    list_marker: P,
    out: &mut Decoded<P>,
  ) -> bool {
    if declaration.len() == 1
      && self.check_inherit(InheritScope::Variant(variant), &declaration.terms[0], out)
    {
      return true;
    }
    let Some(entry) = self.list_target(variant, declaration) else {
      return false;
    };

    let subs = declaration.split(Separator::Comma);
    let mut items = Vec::with_capacity(subs.len());
    for (index, sub) in subs.iter().enumerate() {
      if sub.is_empty() {
        tracing::trace!(property = %entry.name, index, "Empty list segment");
        return false;
      }
      let Some(matched) = self.attempt(variant, sub.terms()) else {
        return false;
      };
      items.push(list_entry(matched, index == 0));
    }

    out.set(entry.name.clone(), list_marker, Some(Term::list(items)));
    true
  }

  /// Decodes a comma-separated list of layers, every layer running the full
  /// greedy match over all variants.
  ///
  /// Each layer starts from `defaults`. Longhands whose kind is
  /// [`ValueType::List`] accumulate one entry per layer in a nested list;
  /// the remaining longhands take the value of the last layer.
  #[must_use]
  pub fn vary_list(
    &self,
    declaration: &Declaration<P>,
    defaults: &dyn Defaults<P>,
    out: &mut Decoded<P>,
  ) -> bool {
    if declaration.len() == 1
      && self.check_inherit(InheritScope::All, &declaration.terms[0], out)
    {
      return true;
    }
    if mixes_inherit(declaration.terms()) {
      tracing::trace!(property = %declaration.property, "inherit combined with other terms");
      return false;
    }

    let layers = declaration.split(Separator::Comma);
    let size = layers.len();
    let mut dest = Decoded::new();

    for (index, layer) in layers.iter().enumerate() {
      if layer.is_empty() {
        tracing::trace!(property = %declaration.property, layer = index, "Empty layer");
        return false;
      }

      let mut session = Session::new(layer.terms(), self.table.len());
      let mut scratch = Decoded::new();
      self.assign_defaults(defaults, &mut scratch);

      if !self.scan(&mut session, &mut scratch) {
        tracing::trace!(property = %declaration.property, layer = index, "Layer did not match");
        return false;
      }
      self.grammar.complete_list_item(&session, &mut scratch);
      if !self
        .grammar
        .validate_list_item(index, size, &session, &scratch)
      {
        tracing::trace!(
          property = %declaration.property,
          layer = index,
          "Layer failed validation"
        );
        return false;
      }

      merge_layer(scratch, &mut dest);
    }

    if !self.grammar.validate_list(size, &dest) {
      tracing::trace!(property = %declaration.property, layers = size, "List failed validation");
      return false;
    }

    out.merge(dest);
    true
  }

  /// Runs the greedy loop over the session's terms, recording matches in
  /// `out`.
  fn scan(&self, session: &mut Session<'_, P>, out: &mut Decoded<P>) -> bool {
    if mixes_inherit(session.terms()) {
      tracing::trace!("inherit combined with other terms");
      return false;
    }

    let mut index = 0;
    while index < session.len() {
      let Some((variant, matched)) = self.match_term(session, index) else {
        tracing::trace!(index, term = ?session.term(index), "No variant accepts term");
        return false;
      };

      session.mark_passed(variant);
      if let Some(entry) = self.table.get(variant) {
        out.set(entry.name.clone(), matched.property, detached(matched.value));
      }
      index += matched.consumed.max(1);
    }

    true
  }

  fn match_term(&self, session: &Session<'_, P>, index: usize) -> Option<(usize, Matched<P>)> {
    // First accepting variant wins; earlier assignments are never revisited.
    (0..self.table.len()).find_map(|variant| {
      if !self.grammar.variant_condition(variant, session, index) || session.passed(variant) {
        return None;
      }
      self
        .grammar
        .variant(variant, session, index)
        .map(|matched| (variant, matched))
    })
  }

  /// One predicate call of `variant` which has to use up all of `terms`.
  fn attempt(&self, variant: usize, terms: &[Term<P>]) -> Option<Matched<P>> {
    if terms.is_empty() || mixes_inherit(terms) {
      return None;
    }

    let session = Session::new(terms, self.table.len());
    let matched = self.grammar.variant(variant, &session, 0)?;
    if matched.consumed != terms.len() {
      tracing::trace!(
        variant,
        consumed = matched.consumed,
        terms = terms.len(),
        "Variant left terms unused"
      );
      return None;
    }

    Some(matched)
  }

  fn try_whole(&self, variant: usize, terms: &[Term<P>], out: &mut Decoded<P>) -> bool {
    let Some(entry) = self.table.get(variant) else {
      return false;
    };
    let Some(matched) = self.attempt(variant, terms) else {
      return false;
    };

    out.set(entry.name.clone(), matched.property, detached(matched.value));
    true
  }

  fn list_target(&self, variant: usize, declaration: &Declaration<P>) -> Option<&Variant<P>> {
    if declaration.is_empty() || mixes_inherit(declaration.terms()) {
      return None;
    }
    self.table.get(variant)
  }
}

fn mixes_inherit<P>(terms: &[Term<P>]) -> bool {
  terms.len() > 1 && terms.iter().any(Term::is_inherit)
}

/// Drops the leading separator of a decoded value; it only made sense inside
/// the authored declaration.
fn detached<P>(value: Option<Term<P>>) -> Option<Term<P>> {
  value.map(|mut value| {
    value.set_separator(None);
    value
  })
}

fn list_entry<P>(matched: Matched<P>, first: bool) -> Term<P> {
  let entry = Term::property_value(matched.property, detached(matched.value));
  if first {
    entry
  } else {
    entry.with_separator(Separator::Comma)
  }
}

fn merge_layer<P: Property>(layer: Decoded<P>, dest: &mut Decoded<P>) {
  let Decoded {
    properties,
    mut values,
  } = layer;

  for (name, property) in properties {
    let value = values.shift_remove(&name);
    match property.value_type() {
      ValueType::List => {
        let class = property.class();
        dest.push_nested(&name, property, value.as_ref());
        dest.set_property(name, P::nested_list(class));
      }
      ValueType::Simple => dest.set(name, property, value),
    }
  }
}
