/// Interleave `separators` and `words`: `separators[0]`, `words[0]`,
/// `separators[1]`, ... Either sequence may be shorter than the other;
/// missing entries contribute nothing.
pub fn reassemble<W, S>(words: &[W], separators: &[S]) -> String
where
  W: AsRef<str>,
  S: AsRef<str>,
{
  let capacity = words.iter().map(|w| w.as_ref().len()).sum::<usize>()
    + separators.iter().map(|s| s.as_ref().len()).sum::<usize>();
  let mut res = String::with_capacity(capacity);

  for idx in 0..words.len().max(separators.len()) {
    if let Some(separator) = separators.get(idx) {
      res.push_str(separator.as_ref());
    }
    if let Some(word) = words.get(idx) {
      res.push_str(word.as_ref());
    }
  }
  res
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn interleaves() {
    assert_eq!(reassemble(&["a", "b"], &["<", "|", ">"]), "<a|b>");
  }

  #[test]
  fn uneven_lengths() {
    assert_eq!(reassemble(&["a", "b", "c"], &["-"]), "-abc");
    assert_eq!(reassemble(&["a"], &["", "_", "_", "!"]), "a__!");
    assert_eq!(reassemble::<&str, &str>(&[], &[]), "");
  }

  #[test]
  fn owned_words() {
    let words = vec![String::from("x"), String::from("y")];
    assert_eq!(reassemble(&words, &["", "_", ""]), "x_y");
  }
}
