//! Splitting text into words and the separators around them.
//!
//! A word is one of:
//!
//! - a digit run fused with letters (`5th`, `21st`)
//! - a letter run, optionally joined to a second letter run by a single
//!   apostrophe (`John's`, `l'été`, `don’t`)
//! - a bare digit run (`2024`)
//!
//! Everything else (whitespace, punctuation, symbols, combining marks) is
//! separator material. The separators always outnumber the words by one, so
//! interleaving them gives back the input byte for byte:
//!
//! ```
//! use recase_core::tokenizer::tokenize;
//!
//! let tokens = tokenize("  John's 5th car!");
//! assert_eq!(tokens.words, ["John's", "5th", "car"]);
//! assert_eq!(tokens.separators, ["  ", " ", " ", "!"]);
//! assert_eq!(tokens.reassemble(), "  John's 5th car!");
//! ```

use once_cell::sync::Lazy;
use regex_automata::meta::Regex;

use crate::reassemble::reassemble;

fn word_regex() -> &'static Regex {
  // Alternation is leftmost-first: `5th` is one word, not `5` + `th`.
  static REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]+\p{L}+|\p{L}+(?:['’]\p{L}+)?|[0-9]+").expect("word regex should compile")
  });

  &REGEX
}

/// Words and separators borrowed from the tokenized text.
///
/// Invariant: `separators.len() == words.len() + 1`. The leading and trailing
/// separators are present even when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens<'a> {
  pub words:      Vec<&'a str>,
  pub separators: Vec<&'a str>,
}

impl<'a> Tokens<'a> {
  #[inline]
  pub fn len(&self) -> usize {
    self.words.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  /// Map every word to a new word. `f` receives the word index and the total
  /// word count for position-sensitive rules.
  pub fn map_words<T, F>(&self, mut f: F) -> Vec<T>
  where
    F: FnMut(usize, usize, &'a str) -> T,
  {
    let len = self.words.len();
    self
      .words
      .iter()
      .enumerate()
      .map(|(idx, word)| f(idx, len, word))
      .collect()
  }

  /// Interleave the words and separators back into a single string.
  pub fn reassemble(&self) -> String {
    reassemble(&self.words, &self.separators)
  }
}

pub fn tokenize(text: &str) -> Tokens<'_> {
  let mut words = Vec::new();
  let mut separators = Vec::new();
  let mut pos = 0;

  for mat in word_regex().find_iter(text) {
    separators.push(&text[pos..mat.start()]);
    words.push(&text[mat.range()]);
    pos = mat.end();
  }
  separators.push(&text[pos..]);

  debug_assert_eq!(separators.len(), words.len() + 1);
  Tokens { words, separators }
}

#[cfg(test)]
mod test {
  use super::*;

  #[track_caller]
  fn assert_tokens(input: &str, words: &[&str], separators: &[&str]) {
    let tokens = tokenize(input);
    assert_eq!(tokens.words, words, "words of {input:?}");
    assert_eq!(tokens.separators, separators, "separators of {input:?}");
    assert_eq!(tokens.reassemble(), input);
  }

  quickcheck::quickcheck! {
      fn test_round_trip(text: String) -> bool {
          tokenize(&text).reassemble() == text
      }

      fn test_separator_count(text: String) -> bool {
          let tokens = tokenize(&text);
          tokens.separators.len() == tokens.words.len() + 1
      }
  }

  #[test]
  fn empty() {
    assert_tokens("", &[], &[""]);
  }

  #[test]
  fn no_words() {
    assert_tokens("  !?; ", &[], &["  !?; "]);
  }

  #[test]
  fn plain_words() {
    assert_tokens("hello world", &["hello", "world"], &["", " ", ""]);
    assert_tokens(" hello\tworld\n", &["hello", "world"], &[" ", "\t", "\n"]);
  }

  #[test]
  fn contractions_and_possessives() {
    assert_tokens("John's car", &["John's", "car"], &["", " ", ""]);
    assert_tokens("don’t stop", &["don’t", "stop"], &["", " ", ""]);
    assert_tokens("l'été", &["l'été"], &["", ""]);
    // only one apostrophe joins
    assert_tokens("rock'n'roll", &["rock'n", "roll"], &["", "'", ""]);
    // a trailing apostrophe is punctuation
    assert_tokens("the dogs' bowls", &["the", "dogs", "bowls"], &["", " ", "' ", ""]);
    assert_tokens("'quoted'", &["quoted"], &["'", "'"]);
  }

  #[test]
  fn numbers_and_ordinals() {
    assert_tokens("5th of 12", &["5th", "of", "12"], &["", " ", " ", ""]);
    assert_tokens("1,000.50", &["1", "000", "50"], &["", ",", ".", ""]);
    // letters then digits split at the boundary
    assert_tokens("abc123", &["abc", "123"], &["", "", ""]);
  }

  #[test]
  fn snake_and_kebab_input() {
    assert_tokens("first_name", &["first", "name"], &["", "_", ""]);
    assert_tokens("first-name", &["first", "name"], &["", "-", ""]);
  }

  #[test]
  fn non_latin_scripts() {
    assert_tokens("Привет, мир", &["Привет", "мир"], &["", ", ", ""]);
    assert_tokens("東京 tower", &["東京", "tower"], &["", " ", ""]);
    // combining marks are not letters
    assert_tokens("e\u{301}t\u{e9}", &["e", "té"], &["", "\u{301}", ""]);
  }

  #[test]
  fn map_words_sees_position() {
    let tokens = tokenize("a b c");
    let mapped = tokens.map_words(|idx, len, word| format!("{word}{idx}/{len}"));
    assert_eq!(mapped, ["a0/3", "b1/3", "c2/3"]);
  }
}
