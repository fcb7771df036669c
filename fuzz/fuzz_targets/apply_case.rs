#![no_main]

mod common;

use libfuzzer_sys::fuzz_target;
use recase_lib::Case;

use crate::common::input_from_bytes;

fuzz_target!(|data: &[u8]| {
  let Some(input) = input_from_bytes(data) else {
    return;
  };

  let recased = input.case.apply(input.text, &input.options);

  if input.case == Case::SnakeCase {
    assert!(!recased.contains(char::is_whitespace));
  }

  // through the registry by name gives the same result
  let by_name = recase_lib::apply_case_with(input.case.name(), input.text, &input.options);
  assert_eq!(by_name.ok().as_deref(), Some(recased.as_str()));
});
