use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::case::{
  Case,
  CaseFn,
};

/// Lookup table from case identifier to transform. The set of cases is
/// closed, so the table is built once and never mutated.
pub struct CaseRegistry {
  handlers: HashMap<&'static str, CaseFn>,
}

impl CaseRegistry {
  fn new() -> Self {
    Self {
      handlers: Case::ALL
        .into_iter()
        .map(|case| (case.name(), case.handler()))
        .collect(),
    }
  }

  pub fn global() -> &'static CaseRegistry {
    static REGISTRY: Lazy<CaseRegistry> = Lazy::new(CaseRegistry::new);
    &REGISTRY
  }

  pub fn get(&self, name: &str) -> Option<CaseFn> {
    self.handlers.get(name).copied()
  }

  /// Registered identifiers, in menu order.
  pub fn names(&self) -> impl Iterator<Item = &'static str> {
    Case::ALL.into_iter().map(Case::name)
  }

  pub fn len(&self) -> usize {
    self.handlers.len()
  }
}
