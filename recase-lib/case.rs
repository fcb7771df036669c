//! The fixed set of case names a host can ask for.

use std::{
  fmt,
  str::FromStr,
};

use serde::{
  Deserialize,
  Serialize,
};

use crate::{
  Error,
  case_convention::{
    to_camel_case,
    to_invert_case,
    to_lower_case,
    to_sentence_case,
    to_snake_case,
    to_start_case,
    to_title_case_with,
    to_upper_case,
  },
  config::Options,
};

/// Signature shared by every entry of the case registry.
pub type CaseFn = fn(&str, &Options) -> String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Case {
  LowerCase,
  UpperCase,
  InvertCase,
  SentenceCase,
  StartCase,
  TitleCase,
  CamelCase,
  SnakeCase,
}

impl Case {
  /// Every case, in menu order.
  pub const ALL: [Case; 8] = [
    Case::LowerCase,
    Case::UpperCase,
    Case::InvertCase,
    Case::SentenceCase,
    Case::StartCase,
    Case::TitleCase,
    Case::CamelCase,
    Case::SnakeCase,
  ];

  /// The identifier hosts use to request this case.
  pub const fn name(self) -> &'static str {
    match self {
      Case::LowerCase => "lowerCase",
      Case::UpperCase => "upperCase",
      Case::InvertCase => "invertCase",
      Case::SentenceCase => "sentenceCase",
      Case::StartCase => "startCase",
      Case::TitleCase => "titleCase",
      Case::CamelCase => "camelCase",
      Case::SnakeCase => "snakeCase",
    }
  }

  /// Menu title, written in the case it produces.
  pub const fn label(self) -> &'static str {
    match self {
      Case::LowerCase => "lower case",
      Case::UpperCase => "UPPER CASE",
      Case::InvertCase => "Invert cASE",
      Case::SentenceCase => "Sentence case.",
      Case::StartCase => "Start Case",
      Case::TitleCase => "Title Case",
      Case::CamelCase => "camelCase",
      Case::SnakeCase => "snake_case",
    }
  }

  /// camelCase and snake_case rewrite separators to build identifiers; the
  /// other cases keep them.
  pub const fn is_identifier(self) -> bool {
    matches!(self, Case::CamelCase | Case::SnakeCase)
  }

  pub fn handler(self) -> CaseFn {
    match self {
      Case::LowerCase => |text, _| to_lower_case(text),
      Case::UpperCase => |text, _| to_upper_case(text),
      Case::InvertCase => |text, _| to_invert_case(text),
      Case::SentenceCase => |text, _| to_sentence_case(text),
      Case::StartCase => |text, _| to_start_case(text),
      Case::TitleCase => |text, options| to_title_case_with(text, options.title_case.infinitive),
      Case::CamelCase => |text, _| to_camel_case(text),
      Case::SnakeCase => |text, _| to_snake_case(text),
    }
  }

  pub fn apply(self, text: &str, options: &Options) -> String {
    (self.handler())(text, options)
  }
}

impl fmt::Display for Case {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Case {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Case::ALL
      .into_iter()
      .find(|case| case.name() == s)
      .ok_or_else(|| Error::UnknownCase { name: s.to_owned() })
  }
}
