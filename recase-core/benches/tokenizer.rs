//! Benchmarks for tokenizing and reassembling text.
//!
//! Run with: `cargo bench -p recase-core --bench tokenizer`

use divan::{
  Bencher,
  black_box,
};
use recase_core::tokenizer::tokenize;

const PROSE: &str = "It was the best of times, it was the worst of times; NASA's 5th \
                     launch went up via the iPhone app. L'été, don’t you think?\n";

fn main() {
  divan::main();
}

#[divan::bench(args = [1, 16, 256])]
fn tokenize_prose(bencher: Bencher, repeat: usize) {
  let text = PROSE.repeat(repeat);
  bencher.bench(|| tokenize(black_box(&text)));
}

#[divan::bench(args = [1, 16, 256])]
fn round_trip(bencher: Bencher, repeat: usize) {
  let text = PROSE.repeat(repeat);
  bencher.bench(|| tokenize(black_box(&text)).reassemble());
}

#[divan::bench]
fn punctuation_only(bencher: Bencher) {
  let text = "-_-!?. ".repeat(512);
  bencher.bench(|| tokenize(black_box(&text)));
}
