//! The contract between the engine and whatever holds the user's selection.
//!
//! A host (an editor buffer, a text field, the command line) exposes the
//! selected text and a way to replace it. [`change_case`] is the whole
//! round trip: resolve the case, read, transform, write back.

use crate::{
  Error,
  Result,
  case::Case,
  config::Options,
};

#[derive(Debug, thiserror::Error)]
pub enum HostError {
  #[error("selection is read-only")]
  ReadOnly,
  #[error(transparent)]
  Io(#[from] std::io::Error),
}

pub trait SelectionHost {
  /// The selected text, or `None` when nothing is selected.
  fn selected_text(&self) -> Option<String>;

  /// Replace the current selection with `text`. Hosts that keep undo history
  /// or cursor placement are responsible for preserving them here.
  fn replace_selection(&mut self, text: &str) -> std::result::Result<(), HostError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  /// The selection was replaced with the recased text.
  Replaced,
  /// Nothing was selected, nothing was written.
  NoSelection,
}

/// Recase the host's selection in place.
///
/// An unknown `case_name` fails before the host is touched. An empty or
/// missing selection is left alone.
pub fn change_case<H>(host: &mut H, case_name: &str, options: &Options) -> Result<Outcome>
where
  H: SelectionHost + ?Sized,
{
  let case: Case = case_name.parse().inspect_err(|_| {
    tracing::warn!("unknown case type: {case_name}");
  })?;

  let Some(selected) = host.selected_text().filter(|text| !text.is_empty()) else {
    tracing::debug!(%case, "no selection, skipping");
    return Ok(Outcome::NoSelection);
  };

  let recased = case.apply(&selected, options);
  host.replace_selection(&recased).map_err(Error::Host)?;
  tracing::debug!(%case, len = recased.len(), "replaced selection");
  Ok(Outcome::Replaced)
}
