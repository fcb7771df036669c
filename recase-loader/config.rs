use std::{
  io::ErrorKind,
  path::{
    Path,
    PathBuf,
  },
};

use eyre::{
  Result,
  WrapErr,
};
use recase_lib::Options;

/// Options from the user config file, overlaid with the workspace's
/// `.recase/config.toml`.
pub fn user_options() -> Result<Options> {
  load_options(&[crate::config_file(), crate::workspace_config_file()])
}

/// Read and merge `files` in order, later files winning. Missing files are
/// skipped, unreadable ones are an error.
pub fn load_options(files: &[PathBuf]) -> Result<Options> {
  let merged = files
    .iter()
    .filter_map(|file| read_table(file).transpose())
    .collect::<Result<Vec<_>>>()?
    .into_iter()
    .fold(toml::Value::Table(toml::Table::new()), |a, b| {
      crate::merge_toml_values(a, b, 2)
    });

  merged
    .try_into()
    .wrap_err("invalid recase configuration")
}

fn read_table(file: &Path) -> Result<Option<toml::Value>> {
  let content = match std::fs::read_to_string(file) {
    Ok(content) => content,
    Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
    Err(err) => {
      return Err(err).wrap_err_with(|| format!("failed to read {}", file.display()));
    },
  };
  tracing::debug!("loading config from {}", file.display());
  let table: toml::Table =
    toml::from_str(&content).wrap_err_with(|| format!("failed to parse {}", file.display()))?;
  Ok(Some(toml::Value::Table(table)))
}

#[cfg(test)]
mod test {
  use recase_lib::InfinitivePolicy;

  use super::*;

  #[test]
  fn missing_files_give_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let options = load_options(&[dir.path().join("nope.toml")]).unwrap();
    assert_eq!(options, Options::default());
  }

  #[test]
  fn later_files_win() {
    let dir = tempfile::tempdir().unwrap();
    let user = dir.path().join("user.toml");
    let workspace = dir.path().join("workspace.toml");
    std::fs::write(&user, "[title-case]\ninfinitive = \"minor-word\"\n").unwrap();
    std::fs::write(&workspace, "[title-case]\ninfinitive = \"capitalize\"\n").unwrap();

    let options = load_options(&[user.clone()]).unwrap();
    assert_eq!(options.title_case.infinitive, InfinitivePolicy::MinorWord);

    let options = load_options(&[user, workspace]).unwrap();
    assert_eq!(options.title_case.infinitive, InfinitivePolicy::Capitalize);
  }

  #[test]
  fn unreadable_files_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let binary = dir.path().join("binary.toml");
    std::fs::write(&binary, [0xff, 0xfe, 0x00]).unwrap();
    let err = load_options(&[binary]).unwrap_err();
    assert!(err.to_string().contains("failed to read"));

    // a directory exists but is not a file
    assert!(load_options(&[dir.path().to_path_buf()]).is_err());
  }

  #[test]
  fn invalid_files_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.toml");
    std::fs::write(&broken, "[title-case\n").unwrap();
    let err = load_options(&[broken]).unwrap_err();
    assert!(err.to_string().contains("failed to parse"));

    let unknown = dir.path().join("unknown.toml");
    std::fs::write(&unknown, "[title-case]\nshout = true\n").unwrap();
    assert!(load_options(&[unknown]).is_err());
  }
}
