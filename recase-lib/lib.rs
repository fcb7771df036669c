//! Case-transform engine.
//!
//! A host hands over the selected text and a case identifier and gets the
//! recased text back:
//!
//! ```
//! assert_eq!(
//!   recase_lib::apply_case("titleCase", "a tale of two cities").unwrap(),
//!   "A Tale of Two Cities"
//! );
//! assert!(recase_lib::apply_case("kebabCase", "a tale").is_err());
//! ```

use smartstring::{
  LazyCompact,
  SmartString,
};
use thiserror::Error;

pub mod case;
pub mod case_convention;
pub mod config;
pub mod registry;
pub mod selection;

pub use case::Case;
pub use config::{
  InfinitivePolicy,
  Options,
};
pub use registry::CaseRegistry;

pub type Tendril = SmartString<LazyCompact>;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown case type: {name}")]
  UnknownCase { name: String },
  #[error("failed to write the selection back")]
  Host(#[from] selection::HostError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Apply the case registered under `case_name` with default options.
pub fn apply_case(case_name: &str, text: &str) -> Result<String> {
  apply_case_with(case_name, text, &Options::default())
}

pub fn apply_case_with(case_name: &str, text: &str, options: &Options) -> Result<String> {
  let Some(handler) = CaseRegistry::global().get(case_name) else {
    tracing::warn!("unknown case type: {case_name}");
    return Err(Error::UnknownCase {
      name: case_name.to_owned(),
    });
  };

  let res = handler(text, options);
  tracing::debug!(
    case = case_name,
    input_len = text.len(),
    output_len = res.len(),
    "applied case"
  );
  Ok(res)
}
