//! `recase`: change the case of text from the command line.
//!
//! ```text
//! recase titleCase how to train your dragon
//! echo "first name" | recase camelCase
//! ```

mod host;

use std::{
  io::{
    self,
    Write,
  },
  path::PathBuf,
};

use clap::{
  ArgAction,
  Parser,
  builder::PossibleValuesParser,
};
use eyre::{
  Result,
  WrapErr,
};
use recase_lib::{
  Case,
  InfinitivePolicy,
  selection::{
    Outcome,
    change_case,
  },
};

use crate::host::StdioHost;

#[derive(Debug, Parser)]
#[command(name = "recase")]
#[command(about = "Change the case of text", version)]
struct Cli {
  /// Case to apply
  #[arg(
    required_unless_present = "list",
    value_parser = PossibleValuesParser::new(Case::ALL.map(Case::name)),
  )]
  case: Option<String>,

  /// Text to recase, read from stdin when omitted
  text: Vec<String>,

  /// List the available cases and exit
  #[arg(long)]
  list: bool,

  /// Keep "to" lowercase in title case, like any other minor word
  #[arg(long)]
  minor_word_to: bool,

  /// Use a different config file
  #[arg(long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Write logs to FILE instead of the cache directory
  #[arg(long, value_name = "FILE")]
  log: Option<PathBuf>,

  /// Increase log verbosity (-v, -vv, -vvv)
  #[arg(short, action = ArgAction::Count)]
  verbose: u8,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.list {
    let mut stdout = io::stdout().lock();
    for case in Case::ALL {
      writeln!(stdout, "{:<14}{}", case.name(), case.label())?;
    }
    return Ok(());
  }

  recase_loader::initialize_log_file(cli.log.clone());
  recase_loader::initialize_config_file(cli.config.clone());
  setup_logging(cli.verbose).wrap_err("failed to initialize logging")?;

  let mut options = recase_loader::config::user_options()?;
  if cli.minor_word_to {
    options.title_case.infinitive = InfinitivePolicy::MinorWord;
  }

  let case = cli.case.ok_or_else(|| eyre::eyre!("no case given"))?;
  let stdout = io::stdout().lock();
  let mut host = if cli.text.is_empty() {
    let input = io::read_to_string(io::stdin()).wrap_err("failed to read stdin")?;
    StdioHost::from_stream(input, stdout)
  } else {
    StdioHost::from_args(&cli.text, stdout)
  };

  match change_case(&mut host, &case, &options)? {
    Outcome::Replaced => log::info!("applied {case}"),
    Outcome::NoSelection => log::info!("no input, nothing to do"),
  }

  Ok(())
}

fn setup_logging(verbosity: u8) -> Result<()> {
  let level = match verbosity {
    0 => log::LevelFilter::Warn,
    1 => log::LevelFilter::Info,
    2 => log::LevelFilter::Debug,
    _ => log::LevelFilter::Trace,
  };

  fern::Dispatch::new()
    .format(|out, message, record| {
      out.finish(format_args!(
        "{} {} [{}] {}",
        chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
        record.target(),
        record.level(),
        message
      ))
    })
    .level(level)
    .chain(fern::log_file(recase_loader::log_file())?)
    .apply()?;

  Ok(())
}

#[cfg(test)]
mod test {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn verify_cli() {
    Cli::command().debug_assert();
  }

  #[test]
  fn parses_case_and_text() {
    let cli = Cli::try_parse_from(["recase", "-vv", "titleCase", "how", "to", "fly"]).unwrap();
    assert_eq!(cli.case.as_deref(), Some("titleCase"));
    assert_eq!(cli.text, ["how", "to", "fly"]);
    assert_eq!(cli.verbose, 2);
  }

  #[test]
  fn rejects_unknown_cases() {
    assert!(Cli::try_parse_from(["recase", "shoutCase", "hi"]).is_err());
    assert!(Cli::try_parse_from(["recase"]).is_err());
    assert!(Cli::try_parse_from(["recase", "--list"]).is_ok());
  }
}
