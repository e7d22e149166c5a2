use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
   error::{GitwokError, Result},
   types::PRESET_COMMIT_TYPES,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CommitConfig {
   /// Allowed commit types mapped to a short description, in display order
   pub types: IndexMap<String, String>,

   /// Allowed scopes (empty allows any scope)
   pub scopes: Vec<String>,

   /// Reject types/scopes missing from the lists above
   pub enforce_types: bool,

   /// Tera template used to render messages instead of the built-in format
   pub template: Option<PathBuf>,
}

/// Preset commit types as an ordered map
pub fn default_types() -> IndexMap<String, String> {
   PRESET_COMMIT_TYPES
      .iter()
      .map(|(name, description)| ((*name).to_string(), (*description).to_string()))
      .collect()
}

impl Default for CommitConfig {
   fn default() -> Self {
      Self { types: default_types(), scopes: vec![], enforce_types: false, template: None }
   }
}

impl CommitConfig {
   /// Load config from the given TOML file.
   ///
   /// A relative `template` path is resolved against the config file's
   /// directory.
   pub fn from_file(path: &Path) -> Result<Self> {
      let contents = std::fs::read_to_string(path).map_err(|e| GitwokError::ConfigError {
         path:   path.display().to_string(),
         reason: e.to_string(),
      })?;
      let mut config = Self::from_toml(&contents).map_err(|e| match e {
         GitwokError::ConfigError { reason, .. } => {
            GitwokError::ConfigError { path: path.display().to_string(), reason }
         },
         other => other,
      })?;

      if let Some(template) = &config.template
         && template.is_relative()
         && let Some(dir) = path.parent()
      {
         config.template = Some(dir.join(template));
      }

      Ok(config)
   }

   /// Parse config from TOML text
   pub fn from_toml(contents: &str) -> Result<Self> {
      toml::from_str(contents).map_err(|e| GitwokError::ConfigError {
         path:   "<inline>".to_string(),
         reason: e.to_string(),
      })
   }

   /// Load from `path` when given, otherwise use defaults
   pub fn load(path: Option<&Path>) -> Result<Self> {
      path.map_or_else(|| Ok(Self::default()), Self::from_file)
   }
}

#[cfg(test)]
mod tests {
   use std::io::Write;

   use super::*;

   #[test]
   fn test_default_config_uses_presets() {
      let config = CommitConfig::default();
      let names: Vec<&str> = config.types.keys().map(String::as_str).collect();
      assert_eq!(names, vec![
         "fix", "feat", "build", "chore", "ci", "docs", "perf", "refactor", "style", "test"
      ]);
      assert!(config.scopes.is_empty());
      assert!(!config.enforce_types);
      assert!(config.template.is_none());
   }

   #[test]
   fn test_from_toml_partial_keeps_defaults() {
      let config = CommitConfig::from_toml("enforce_types = true\nscopes = [\"core\"]").unwrap();
      assert!(config.enforce_types);
      assert_eq!(config.scopes, vec!["core"]);
      assert_eq!(config.types.len(), 10);
   }

   #[test]
   fn test_from_toml_custom_types_keep_order() {
      let config = CommitConfig::from_toml(
         "[types]\nwip = \"Work in progress\"\nfix = \"A bug fix\"\nrelease = \"Cut a release\"",
      )
      .unwrap();
      let names: Vec<&str> = config.types.keys().map(String::as_str).collect();
      assert_eq!(names, vec!["wip", "fix", "release"]);
      assert_eq!(config.types["wip"], "Work in progress");
   }

   #[test]
   fn test_from_toml_invalid() {
      let err = CommitConfig::from_toml("enforce_types = \"yes\"").unwrap_err();
      assert!(matches!(err, GitwokError::ConfigError { .. }));
   }

   #[test]
   fn test_from_file_resolves_relative_template() {
      let dir = tempfile::tempdir().unwrap();
      let path = dir.path().join("gitwok.toml");
      let mut file = std::fs::File::create(&path).unwrap();
      writeln!(file, "template = \"commit.tera\"").unwrap();

      let config = CommitConfig::from_file(&path).unwrap();
      assert_eq!(config.template, Some(dir.path().join("commit.tera")));
   }

   #[test]
   fn test_from_file_reports_path() {
      let dir = tempfile::tempdir().unwrap();
      let path = dir.path().join("broken.toml");
      std::fs::write(&path, "types = 3").unwrap();

      let err = CommitConfig::from_file(&path).unwrap_err();
      assert!(err.to_string().contains("broken.toml"));
   }

   #[test]
   fn test_load_missing_file_errors() {
      let dir = tempfile::tempdir().unwrap();
      assert!(CommitConfig::load(Some(&dir.path().join("absent.toml"))).is_err());
      assert!(CommitConfig::load(None).is_ok());
   }
}
