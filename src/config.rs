//! Configuration file support for kissbom.
//!
//! Provides YAML-based configuration through `kissbom.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use log::warn;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::shared::error::KissbomError;
use crate::shared::security::validate_file_name;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "kissbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Default output format name.
    pub format: Option<String>,
    /// Base name used when an SBOM has no subject metadata.
    pub name: Option<String>,
    pub output_dir: Option<PathBuf>,
    /// Whether to look for a newer kissbom release on start-up.
    pub check_updates: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, parsed.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|f| f.parse::<OutputFormat>().map_err(Into::into))
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.output_format()?;

    if let Some(name) = config.name.as_deref() {
        validate_file_name(name).map_err(|e| KissbomError::Validation {
            message: format!(
                "Invalid config: name: {}\n\n💡 Hint: 'name' is a bare file name without directories.",
                e
            ),
        })?;
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!("Unknown config field '{}' will be ignored.", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: csv
name: inventory
output_dir: reports
check_updates: false
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.format.as_deref(), Some("csv"));
        assert_eq!(config.output_format().unwrap(), Some(OutputFormat::Csv));
        assert_eq!(config.name.as_deref(), Some("inventory"));
        assert_eq!(config.output_dir, Some(PathBuf::from("reports")));
        assert_eq!(config.check_updates, Some(false));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: yaml\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.output_format().unwrap(), Some(OutputFormat::Yaml));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_unsupported_format_in_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: barf\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<KissbomError>(),
            Some(KissbomError::UnsupportedFormat { format }) if format == "barf"
        ));
    }

    #[test]
    fn test_name_with_separator_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "name: ../outside\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid config: name"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: json
unknown_field: true
another_unknown: value
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.format.is_none());
        assert!(config.name.is_none());
        assert!(config.output_dir.is_none());
        assert!(config.check_updates.is_none());
        assert_eq!(config.output_format().unwrap(), None);
        assert!(config.unknown_fields.is_empty());
    }
}
