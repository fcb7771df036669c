pub mod config;

use std::{
  path::{
    Path,
    PathBuf,
  },
  sync::OnceLock,
};

use etcetera::base_strategy::{
  BaseStrategy,
  choose_base_strategy,
};

static CONFIG_FILE: OnceLock<PathBuf> = OnceLock::new();

static LOG_FILE: OnceLock<PathBuf> = OnceLock::new();

pub fn initialize_config_file(specified_file: Option<PathBuf>) {
  let config_file = specified_file.unwrap_or_else(default_config_file);
  ensure_parent_dir(&config_file);
  CONFIG_FILE.set(config_file).ok();
}

pub fn initialize_log_file(specified_file: Option<PathBuf>) {
  let log_file = specified_file.unwrap_or_else(default_log_file);
  ensure_parent_dir(&log_file);
  LOG_FILE.set(log_file).ok();
}

pub fn config_dir() -> PathBuf {
  if let Some(dir) = std::env::var_os("RECASE_CONFIG_DIR") {
    return dir.into();
  }
  let strategy = choose_base_strategy().expect("Unable to find the config directory!");
  let mut path = strategy.config_dir();
  path.push("recase");
  path
}

pub fn cache_dir() -> PathBuf {
  if let Some(dir) = std::env::var_os("RECASE_CACHE_DIR") {
    return dir.into();
  }
  let strategy = choose_base_strategy().expect("Unable to find the cache directory!");
  let mut path = strategy.cache_dir();
  path.push("recase");
  path
}

pub fn config_file() -> PathBuf {
  CONFIG_FILE
    .get_or_init(|| {
      let path = default_config_file();
      ensure_parent_dir(&path);
      path
    })
    .clone()
}

pub fn log_file() -> PathBuf {
  LOG_FILE
    .get_or_init(|| {
      let path = default_log_file();
      ensure_parent_dir(&path);
      path
    })
    .clone()
}

pub fn workspace_config_file() -> PathBuf {
  find_workspace().0.join(".recase").join("config.toml")
}

pub fn default_log_file() -> PathBuf {
  cache_dir().join("recase.log")
}

/// Merge two TOML documents, merging values from `right` onto `left`
///
/// `merge_depth` sets the nesting depth up to which tables are merged instead
/// of overridden. Arrays and scalars from `right` always replace the values
/// in `left`.
///
/// With a depth of 2, a workspace file
/// ```toml
/// [title-case]
/// infinitive = "minor-word"
/// ```
/// overrides only that key of the user file and keeps every other table.
pub fn merge_toml_values(left: toml::Value, right: toml::Value, merge_depth: usize) -> toml::Value {
  use toml::Value;

  match (left, right) {
    (Value::Table(mut left_map), Value::Table(right_map)) => {
      if merge_depth > 0 {
        for (rname, rvalue) in right_map {
          match left_map.remove(&rname) {
            Some(lvalue) => {
              let merged_value = merge_toml_values(lvalue, rvalue, merge_depth - 1);
              left_map.insert(rname, merged_value);
            },
            None => {
              left_map.insert(rname, rvalue);
            },
          }
        }
        Value::Table(left_map)
      } else {
        Value::Table(right_map)
      }
    },
    // Catch everything else we didn't handle, and use the right value
    (_, value) => value,
  }
}

/// Finds the current workspace folder.
///
/// Searches upward from the CWD and returns the first directory that contains
/// either `.git`, `.jj` or `.recase`. If no workspace was found returns
/// (CWD, true). Otherwise (workspace, false) is returned
pub fn find_workspace() -> (PathBuf, bool) {
  match std::env::current_dir() {
    Ok(current_dir) => find_workspace_in(current_dir),
    Err(_) => (PathBuf::new(), true),
  }
}

pub fn find_workspace_in(dir: impl AsRef<Path>) -> (PathBuf, bool) {
  let dir = dir.as_ref();
  for ancestor in dir.ancestors() {
    if ancestor.join(".git").exists()
      || ancestor.join(".jj").exists()
      || ancestor.join(".recase").exists()
    {
      return (ancestor.to_owned(), false);
    }
  }

  (dir.to_owned(), true)
}

fn default_config_file() -> PathBuf {
  config_dir().join("config.toml")
}

fn ensure_parent_dir(path: &Path) {
  if let Some(parent) = path.parent()
    && !parent.exists()
  {
    std::fs::create_dir_all(parent).ok();
  }
}

#[cfg(test)]
mod merge_toml_tests {
  use toml::Value;

  use super::merge_toml_values;

  #[test]
  fn nested_tables_merge() {
    const USER: &str = r#"
        [title-case]
        infinitive = "capitalize"
        extra = 1
        "#;
    const WORKSPACE: &str = r#"
        [title-case]
        infinitive = "minor-word"
        "#;

    let user: Value = Value::Table(toml::from_str(USER).unwrap());
    let workspace: Value = Value::Table(toml::from_str(WORKSPACE).unwrap());

    let merged = merge_toml_values(user, workspace, 2);
    let title_case = merged.get("title-case").unwrap();
    assert_eq!(
      title_case.get("infinitive").unwrap().as_str().unwrap(),
      "minor-word"
    );
    // keys only present on the left survive
    assert_eq!(title_case.get("extra").unwrap().as_integer().unwrap(), 1);
  }

  #[test]
  fn depth_zero_replaces() {
    let left: Value = Value::Table(toml::from_str("a = 1\nb = 2").unwrap());
    let right: Value = Value::Table(toml::from_str("a = 3").unwrap());

    let merged = merge_toml_values(left, right, 0);
    assert_eq!(merged.get("a").unwrap().as_integer().unwrap(), 3);
    assert!(merged.get("b").is_none());
  }

  #[test]
  fn find_workspace_marker() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::create_dir(dir.path().join("a").join(".recase")).unwrap();

    let (root, is_cwd) = super::find_workspace_in(&nested);
    assert_eq!(root, dir.path().join("a"));
    assert!(!is_cwd);
  }
}
