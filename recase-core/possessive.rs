//! Possessive endings (`'s`, `’s`).
//!
//! Transforms that recase words treat the possessive ending separately from
//! the stem, so `NASA's` keeps its acronym while the `'s` follows the usual
//! lowercase convention. Identifier transforms drop the apostrophe instead.

use std::borrow::Cow;

use crate::chars::{
  char_is_apostrophe,
  char_is_word,
};

/// A word split into its stem and an optional possessive ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseSuffix<'a> {
  pub base:   &'a str,
  /// Empty, or an apostrophe optionally followed by a lowercase `s`.
  pub suffix: &'a str,
}

impl<'a> BaseSuffix<'a> {
  fn whole(word: &'a str) -> Self {
    Self {
      base:   word,
      suffix: "",
    }
  }
}

/// Split a trailing possessive ending off `word`. The stem must be a
/// non-empty run of letters and digits, otherwise the whole word is the base.
pub fn split_base_and_suffix(word: &str) -> BaseSuffix<'_> {
  let stem = word.strip_suffix('s').unwrap_or(word);
  let Some(base) = stem.strip_suffix(char_is_apostrophe) else {
    return BaseSuffix::whole(word);
  };

  if base.is_empty() || !base.chars().all(char_is_word) {
    return BaseSuffix::whole(word);
  }

  BaseSuffix {
    base,
    suffix: &word[base.len()..],
  }
}

/// Drop possessive punctuation: `John's` -> `Johns`, `James'` -> `James`.
pub fn remove_possessive(word: &str) -> Cow<'_, str> {
  let mut chars = word.char_indices().rev();
  match (chars.next(), chars.next()) {
    (Some((_, s @ ('s' | 'S'))), Some((idx, ap))) if char_is_apostrophe(ap) => {
      let mut res = String::with_capacity(word.len());
      res.push_str(&word[..idx]);
      res.push(s);
      Cow::Owned(res)
    },
    (Some((idx, ap)), _) if char_is_apostrophe(ap) => Cow::Borrowed(&word[..idx]),
    _ => Cow::Borrowed(word),
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[track_caller]
  fn assert_split(word: &str, base: &str, suffix: &str) {
    assert_eq!(split_base_and_suffix(word), BaseSuffix { base, suffix });
  }

  #[test]
  fn test_split_base_and_suffix() {
    assert_split("John's", "John", "'s");
    assert_split("NASA’s", "NASA", "’s");
    assert_split("2024's", "2024", "'s");
    assert_split("James'", "James", "'");
    assert_split("dogs", "dogs", "");
    assert_split("don't", "don't", "");
    assert_split("l'été", "l'été", "");
    // the ending must be lowercase
    assert_split("JOHN'S", "JOHN'S", "");
    // no stem
    assert_split("'s", "'s", "");
    assert_split("", "", "");
  }

  #[test]
  fn test_remove_possessive() {
    assert_eq!(remove_possessive("John's"), "Johns");
    assert_eq!(remove_possessive("JOHN’S"), "JOHNS");
    assert_eq!(remove_possessive("James'"), "James");
    assert_eq!(remove_possessive("James’"), "James");
    assert_eq!(remove_possessive("don't"), "don't");
    assert_eq!(remove_possessive("cats"), "cats");
    assert_eq!(remove_possessive(""), "");
  }

  #[test]
  fn remove_possessive_borrows_when_unchanged() {
    assert!(matches!(remove_possessive("cats"), Cow::Borrowed("cats")));
    assert!(matches!(remove_possessive("cats'"), Cow::Borrowed("cats")));
  }
}
