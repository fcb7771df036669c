use recase_lib::{
  Case,
  InfinitivePolicy,
  Options,
};

const MAX_TEXT_BYTES: usize = 4 * 1024;

pub struct Input<'a> {
  pub case:    Case,
  pub options: Options,
  pub text:    &'a str,
}

/// The first byte picks the case and the title-case policy, the rest is the
/// text. Long inputs are cut at `MAX_TEXT_BYTES`, backing off to the last
/// whole character. Other non UTF-8 inputs are rejected.
pub fn input_from_bytes(data: &[u8]) -> Option<Input<'_>> {
  let (&selector, rest) = data.split_first()?;
  let rest = &rest[..rest.len().min(MAX_TEXT_BYTES)];
  let text = match std::str::from_utf8(rest) {
    Ok(text) => text,
    // the cut landed inside a multi-byte sequence
    Err(err) if err.error_len().is_none() => std::str::from_utf8(&rest[..err.valid_up_to()]).ok()?,
    Err(_) => return None,
  };

  let case = Case::ALL[usize::from(selector) % Case::ALL.len()];
  let mut options = Options::default();
  if selector & 0x80 != 0 {
    options.title_case.infinitive = InfinitivePolicy::MinorWord;
  }

  Some(Input {
    case,
    options,
    text,
  })
}
