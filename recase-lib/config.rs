//! Options that tune the transforms. Deserialized from the `config.toml`
//! resolved by `recase-loader`:
//!
//! ```toml
//! [title-case]
//! infinitive = "minor-word"
//! ```

use serde::{
  Deserialize,
  Serialize,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Options {
  pub title_case: TitleCaseOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct TitleCaseOptions {
  pub infinitive: InfinitivePolicy,
}

/// How title case treats `to` in the middle of a title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InfinitivePolicy {
  /// Treat `to` as an infinitive marker: `How To Train Your Dragon`.
  #[default]
  Capitalize,
  /// Treat `to` as any other minor word: `How to Train Your Dragon`.
  MinorWord,
}
