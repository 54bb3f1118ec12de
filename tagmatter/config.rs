//! Engine configuration.
//!
//! The host owns and persists the configuration; the engine only reads it.
//! [`EngineConfig::from_toml`] is a convenience for hosts that keep their
//! settings in TOML.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct EngineConfig {
  /// After accepting a suggestion, leave the field ready for the next
  /// entry (`, ` inline, an indented `- ` row in list form).
  pub auto_add_new_entry: bool,
  /// Indent continuation rows with spaces instead of a tab.
  pub use_spaces_for_indent: bool,
  /// Number of spaces per continuation-row indent when
  /// `use_spaces_for_indent` is set.
  pub indent_width: usize,
}

impl Default for EngineConfig {
  fn default() -> Self {
    Self {
      auto_add_new_entry:    true,
      use_spaces_for_indent: true,
      indent_width:          1,
    }
  }
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to parse config: {0}")]
  BadConfig(#[from] toml::de::Error),
  #[error("failed to read config: {0}")]
  Io(#[from] std::io::Error),
}

impl EngineConfig {
  pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
    Ok(toml::from_str(raw)?)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_defaults() {
    let config = EngineConfig::default();
    assert!(config.auto_add_new_entry);
    assert!(config.use_spaces_for_indent);
    assert_eq!(config.indent_width, 1);
  }

  #[test]
  fn test_from_toml_partial() {
    let config = EngineConfig::from_toml("auto-add-new-entry = false\n").unwrap();
    assert!(!config.auto_add_new_entry);
    assert!(config.use_spaces_for_indent);
    assert_eq!(config.indent_width, 1);
  }

  #[test]
  fn test_from_toml_full() {
    let raw = "\
auto-add-new-entry = true
use-spaces-for-indent = false
indent-width = 4
";
    let config = EngineConfig::from_toml(raw).unwrap();
    assert_eq!(config, EngineConfig {
      auto_add_new_entry:    true,
      use_spaces_for_indent: false,
      indent_width:          4,
    });
  }

  #[test]
  fn test_unknown_field_is_rejected() {
    assert!(EngineConfig::from_toml("tabs = 2\n").is_err());
  }
}
