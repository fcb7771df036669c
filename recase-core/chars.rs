//! Character and word-shape predicates used by the case transforms.

use unicode_general_category::{
  GeneralCategory,
  get_general_category,
};

/// Articles, conjunctions and short prepositions (three letters or fewer)
/// that title case leaves lowercase.
pub const MINOR_WORDS: &[&str] = &[
  // articles
  "a", "an", "the",
  // conjunctions
  "and", "but", "for", "nor", "or", "so", "yet",
  // prepositions
  "as", "at", "by", "in", "of", "off", "on", "per", "to", "up", "via",
];

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum WordShape {
  /// Every letter is uppercase, e.g. `NASA`.
  AllCaps,
  /// An uppercase letter after the first character, e.g. `iPhone`.
  InternalCaps,
  /// Ordinals and numbers, e.g. `5th`.
  LeadsWithDigit,
  Plain,
}

impl WordShape {
  /// Classify `word`. When several shapes apply the first one in declaration
  /// order wins.
  pub fn of(word: &str) -> Self {
    if is_all_uppercase(word) {
      WordShape::AllCaps
    } else if has_internal_capitals(word) {
      WordShape::InternalCaps
    } else if starts_with_digit(word) {
      WordShape::LeadsWithDigit
    } else {
      WordShape::Plain
    }
  }

  /// Shapes whose spelling carries meaning and must survive recasing.
  pub fn is_preserved(self) -> bool {
    matches!(self, WordShape::AllCaps | WordShape::InternalCaps)
  }
}

#[inline]
pub fn char_is_letter(ch: char) -> bool {
  matches!(
    get_general_category(ch),
    GeneralCategory::UppercaseLetter
      | GeneralCategory::LowercaseLetter
      | GeneralCategory::TitlecaseLetter
      | GeneralCategory::ModifierLetter
      | GeneralCategory::OtherLetter
  )
}

/// Characters the tokenizer keeps inside a word: letters and ASCII digits.
#[inline]
pub fn char_is_word(ch: char) -> bool {
  ch.is_ascii_digit() || char_is_letter(ch)
}

#[inline]
pub fn char_is_apostrophe(ch: char) -> bool {
  matches!(ch, '\'' | '’')
}

#[inline]
pub fn char_is_upper_letter(ch: char) -> bool {
  get_general_category(ch) == GeneralCategory::UppercaseLetter
}

/// Returns `true` if `word` has at least one letter and every letter equals
/// its own uppercase mapping. Non-letters are ignored.
pub fn is_all_uppercase(word: &str) -> bool {
  let mut letters = word.chars().filter(|&c| char_is_letter(c)).peekable();
  if letters.peek().is_none() {
    return false;
  }
  letters.all(|c| c.to_uppercase().eq(std::iter::once(c)))
}

/// Returns `true` if any character after the first is an uppercase letter.
pub fn has_internal_capitals(word: &str) -> bool {
  word.chars().skip(1).any(char_is_upper_letter)
}

#[inline]
pub fn starts_with_digit(word: &str) -> bool {
  word.starts_with(|c: char| c.is_ascii_digit())
}

/// `word` must already be lowercased.
#[inline]
pub fn is_minor_word(word: &str) -> bool {
  MINOR_WORDS.contains(&word)
}

/// Swap the case of a single character. Uppercase goes to lowercase, anything
/// with an uppercase mapping (titlecase `ǅ` included) goes to uppercase, the
/// rest passes through. Mappings that expand (`ß` -> `SS`) are kept whole.
pub fn invert_char<B: Extend<char>>(ch: char, buf: &mut B) {
  if ch.is_uppercase() {
    buf.extend(ch.to_lowercase());
  } else if ch.to_uppercase().eq(std::iter::once(ch)) {
    buf.extend(std::iter::once(ch));
  } else {
    buf.extend(ch.to_uppercase());
  }
}

/// Uppercase the first character of `word` and lowercase the rest.
pub fn capitalize_with<B: Extend<char>>(word: &str, buf: &mut B) {
  let mut chars = word.chars();
  let Some(first) = chars.next() else {
    return;
  };
  buf.extend(first.to_uppercase());
  buf.extend(chars.as_str().to_lowercase().chars());
}
