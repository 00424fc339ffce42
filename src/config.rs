//! User configuration loaded from a TOML file.

use crate::calculator::{CalculatorEngine, DEFAULT_PLACEHOLDER, OperatorLabels};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// History text shown before the first calculation and after a clear.
    pub history_placeholder: String,
    /// Render operators by name (`Add`) or by keypad symbol (`+`).
    pub operator_labels: OperatorLabels,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            history_placeholder: DEFAULT_PLACEHOLDER.to_string(),
            operator_labels: OperatorLabels::Names,
        }
    }
}

impl Config {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("zcalc")
            .join("config.toml")
    }

    /// Load the configuration, falling back to defaults if the file is missing.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Build an engine honoring these settings.
    pub fn engine(&self) -> CalculatorEngine {
        CalculatorEngine::with_settings(
            self.display.history_placeholder.clone(),
            self.display.operator_labels,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.display.history_placeholder, "Your equation");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse("[display]\noperator_labels = \"symbols\"\n").unwrap();
        assert_eq!(config.display.operator_labels, OperatorLabels::Symbols);
        assert_eq!(config.display.history_placeholder, DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::parse("[display]\noperator_labels = \"emoji\"\n").is_err());
        assert!(Config::parse("display = 3").is_err());
    }

    #[test]
    fn test_missing_file() {
        let config = Config::load(Path::new("/nonexistent/zcalc/config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_engine_uses_placeholder() {
        let config = Config::parse("[display]\nhistory_placeholder = \"Ready\"\n").unwrap();
        assert_eq!(config.engine().history(), "Ready");
    }
}
