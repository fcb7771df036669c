//! The eight case transforms.
//!
//! Every transform tokenizes its input, recases each word on its own and
//! reassembles the result with the original separators, so spacing and
//! punctuation come back untouched. The identifier styles are the exception:
//! camelCase drops the separators and snake_case replaces them with `_`.
//!
//! | Transform | `"NASA's iPhone launch"` |
//! |-----------|--------------------------|
//! | lower     | `NASA's iphone launch`   |
//! | upper     | `NASA'S IPHONE LAUNCH`   |
//! | invert    | `NASA's IpHONE LAUNCH`   |
//! | sentence  | `NASA's iPhone launch`   |
//! | start     | `NASA's iPhone Launch`   |
//! | title     | `NASA's iPhone Launch`   |
//! | camel     | `nasasiPhoneLaunch`      |
//! | snake     | `nasas_iphone_launch`    |

use recase_core::{
  chars::{
    WordShape,
    capitalize_with,
    char_is_apostrophe,
    char_is_word,
    has_internal_capitals,
    invert_char,
    is_all_uppercase,
    is_minor_word,
  },
  possessive::{
    BaseSuffix,
    remove_possessive,
    split_base_and_suffix,
  },
  reassemble,
  tokenizer::tokenize,
};

use crate::{
  Tendril,
  config::InfinitivePolicy,
};

fn push_lower(buf: &mut Tendril, s: &str) {
  buf.push_str(&s.to_lowercase());
}

/// `base` verbatim followed by the lowercased suffix, the treatment every
/// transform gives to acronyms.
fn acronym_with(base: &str, suffix: &str, buf: &mut Tendril) {
  buf.push_str(base);
  push_lower(buf, suffix);
}

fn capitalized_with(base: &str, suffix: &str, buf: &mut Tendril) {
  capitalize_with(base, buf);
  push_lower(buf, suffix);
}

/// Lowercase every word except acronyms, whose possessive ending is still
/// lowered. A selection that is entirely uppercase is lowered as a whole.
pub fn to_lower_case(text: &str) -> String {
  if is_all_uppercase(text) {
    return text.to_lowercase();
  }

  let tokens = tokenize(text);
  let words = tokens.map_words(|_, _, word| {
    let BaseSuffix { base, suffix } = split_base_and_suffix(word);
    let mut buf = Tendril::new();
    if is_all_uppercase(base) {
      acronym_with(base, suffix, &mut buf);
    } else {
      push_lower(&mut buf, base);
      push_lower(&mut buf, suffix);
    }
    buf
  });
  reassemble(&words, &tokens.separators)
}

/// Uppercase every word, possessive endings included.
pub fn to_upper_case(text: &str) -> String {
  let tokens = tokenize(text);
  let words = tokens.map_words(|_, _, word| word.to_uppercase());
  reassemble(&words, &tokens.separators)
}

/// Swap the case of every letter, leaving acronyms (and their possessive
/// endings) alone.
pub fn to_invert_case(text: &str) -> String {
  let tokens = tokenize(text);
  let words = tokens.map_words(|_, _, word| {
    let BaseSuffix { base, .. } = split_base_and_suffix(word);
    let mut buf = Tendril::new();
    if is_all_uppercase(base) {
      buf.push_str(word);
    } else {
      word.chars().for_each(|c| invert_char(c, &mut buf));
    }
    buf
  });
  reassemble(&words, &tokens.separators)
}

/// Capitalize the first word and lowercase the rest. Acronyms and words with
/// internal capitals keep their spelling.
pub fn to_sentence_case(text: &str) -> String {
  let tokens = tokenize(text);
  let words = tokens.map_words(|idx, _, word| {
    let BaseSuffix { base, suffix } = split_base_and_suffix(word);
    let mut buf = Tendril::new();
    match WordShape::of(base) {
      WordShape::AllCaps => acronym_with(base, suffix, &mut buf),
      shape if shape.is_preserved() => buf.push_str(word),
      _ if idx == 0 => capitalized_with(base, suffix, &mut buf),
      _ => {
        push_lower(&mut buf, base);
        push_lower(&mut buf, suffix);
      },
    }
    buf
  });
  reassemble(&words, &tokens.separators)
}

/// Capitalize every word. Acronyms and words with internal capitals keep their
/// spelling.
pub fn to_start_case(text: &str) -> String {
  let tokens = tokenize(text);
  let words = tokens.map_words(|_, _, word| {
    let BaseSuffix { base, suffix } = split_base_and_suffix(word);
    let mut buf = Tendril::new();
    match WordShape::of(base) {
      WordShape::AllCaps => acronym_with(base, suffix, &mut buf),
      shape if shape.is_preserved() => buf.push_str(word),
      _ => capitalized_with(base, suffix, &mut buf),
    }
    buf
  });
  reassemble(&words, &tokens.separators)
}

pub fn to_title_case(text: &str) -> String {
  to_title_case_with(text, InfinitivePolicy::default())
}

/// Title case with an explicit rule for a mid-title `to`.
///
/// For each word, the first matching rule wins:
///
/// 1. acronym: keep the base, lowercase the possessive ending
/// 2. internal capitals: keep the word
/// 3. leading digit: keep the word
/// 4. first or last word: capitalize
/// 5. `to` under [`InfinitivePolicy::Capitalize`]: `To`
/// 6. four letters or more: capitalize
/// 7. minor word: lowercase
/// 8. anything else: capitalize
pub fn to_title_case_with(text: &str, infinitive: InfinitivePolicy) -> String {
  let tokens = tokenize(text);
  let words = tokens.map_words(|idx, len, word| {
    let BaseSuffix { base, suffix } = split_base_and_suffix(word);
    let mut buf = Tendril::new();
    match WordShape::of(base) {
      WordShape::AllCaps => acronym_with(base, suffix, &mut buf),
      WordShape::InternalCaps | WordShape::LeadsWithDigit => buf.push_str(word),
      WordShape::Plain => title_word_with(base, suffix, idx, len, infinitive, &mut buf),
    }
    buf
  });
  reassemble(&words, &tokens.separators)
}

fn title_word_with(
  base: &str,
  suffix: &str,
  idx: usize,
  len: usize,
  infinitive: InfinitivePolicy,
  buf: &mut Tendril,
) {
  let lower_base = base.to_lowercase();

  if idx == 0 || idx + 1 == len {
    capitalized_with(&lower_base, suffix, buf);
  } else if infinitive == InfinitivePolicy::Capitalize && lower_base == "to" {
    buf.push_str("To");
    push_lower(buf, suffix);
  } else if base.chars().count() >= 4 {
    capitalized_with(&lower_base, suffix, buf);
  } else if is_minor_word(&lower_base) {
    buf.push_str(&lower_base);
    push_lower(buf, suffix);
  } else {
    capitalized_with(&lower_base, suffix, buf);
  }
}

/// Join the words into a camelCase identifier, dropping every separator and
/// possessive apostrophe. Brand-like words (`iPhone`) are kept as written,
/// only a leading one has its first letter lowered. Acronyms are normalized
/// like plain words.
pub fn to_camel_case(text: &str) -> String {
  let tokens = tokenize(text);
  let words = tokens.map_words(|idx, _, word| {
    let BaseSuffix { base, .. } = split_base_and_suffix(word);
    let keep_inner = has_internal_capitals(base) && !is_all_uppercase(base);
    let word = remove_possessive(word);
    let mut buf = Tendril::new();
    let mut chars = word.chars();
    match (idx, keep_inner) {
      (0, true) => {
        buf.extend(chars.next().into_iter().flat_map(char::to_lowercase));
        buf.push_str(chars.as_str());
      },
      (0, false) => push_lower(&mut buf, &word),
      (_, true) => buf.push_str(&word),
      (_, false) => capitalize_with(&word, &mut buf),
    }
    buf
  });
  reassemble::<_, &str>(&words, &[])
}

/// Lowercase the words, drop possessive apostrophes and join with `_`. Text
/// before the first word and after the last word is dropped.
///
/// Lowercasing can produce characters the tokenizer would split on (`İ`
/// lowers to `i` + U+0307), those are dropped so the output tokenizes back
/// into the same words.
pub fn to_snake_case(text: &str) -> String {
  let tokens = tokenize(text);
  if tokens.is_empty() {
    return String::new();
  }

  let words = tokens.map_words(|_, _, word| {
    remove_possessive(word)
      .to_lowercase()
      .chars()
      .filter(|&c| char_is_word(c) || char_is_apostrophe(c))
      .collect::<Tendril>()
  });
  let last = tokens.len();
  let separators: Vec<&str> = (0..=last)
    .map(|idx| if idx == 0 || idx == last { "" } else { "_" })
    .collect();
  reassemble(&words, &separators)
}
