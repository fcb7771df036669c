//! Text primitives shared by every case transform: word classification,
//! tokenization into words and separators, and lossless reassembly.

pub mod chars;
pub mod possessive;
pub mod reassemble;
pub mod tokenizer;

pub use possessive::{
  BaseSuffix,
  remove_possessive,
  split_base_and_suffix,
};
pub use reassemble::reassemble;
pub use tokenizer::{
  Tokens,
  tokenize,
};
