#![no_main]

use libfuzzer_sys::fuzz_target;
use recase_core::tokenize;

fuzz_target!(|text: &str| {
  let tokens = tokenize(text);
  assert_eq!(tokens.separators.len(), tokens.words.len() + 1);
  assert_eq!(tokens.reassemble(), text);
  assert!(tokens.words.iter().all(|word| !word.is_empty()));
});
