//! Configuration file handling for fwid

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// Configuration for the CLI tool
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Default output format
    pub output: Option<OutputFormat>,
    /// Disable colored output
    pub no_color: Option<bool>,
}

impl Config {
    /// Load configuration from the default config file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("fwid");

        Ok(config_dir.join("config.toml"))
    }

    /// Merge CLI arguments over config file values
    pub fn merge_with_args(&self, output: Option<OutputFormat>, no_color: bool) -> MergedConfig {
        MergedConfig {
            output: output.or(self.output).unwrap_or_default(),
            no_color: no_color || self.no_color.unwrap_or(false),
        }
    }
}

/// Fully resolved configuration after merging CLI args
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedConfig {
    pub output: OutputFormat,
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "output = \"json\"\nno_color = true").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(
            config,
            Config {
                output: Some(OutputFormat::Json),
                no_color: Some(true),
            }
        );
    }

    #[test]
    fn test_load_from_rejects_unknown_format() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "output = \"xml\"").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }

    #[test]
    fn test_args_override_config() {
        let config = Config {
            output: Some(OutputFormat::Json),
            no_color: Some(false),
        };

        let merged = config.merge_with_args(Some(OutputFormat::Table), true);
        assert_eq!(merged.output, OutputFormat::Table);
        assert!(merged.no_color);

        let merged = config.merge_with_args(None, false);
        assert_eq!(merged.output, OutputFormat::Json);
        assert!(!merged.no_color);
    }

    #[test]
    fn test_defaults() {
        let merged = Config::default().merge_with_args(None, false);
        assert_eq!(
            merged,
            MergedConfig {
                output: OutputFormat::Table,
                no_color: false,
            }
        );
    }
}
