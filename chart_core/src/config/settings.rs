//! Application settings: chart file locations and logging

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level settings, usually read from `chart.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ChartConfig {
    /// Load and validate a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config: ChartConfig = super::load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a config string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: ChartConfig = super::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paths.working.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "paths.working must not be empty".to_string(),
            ));
        }
        if self.paths.factory.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "paths.factory must not be empty".to_string(),
            ));
        }
        self.logging.level_filter()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// The user's working chart, written by save and read by load
    #[serde(default = "default_working")]
    pub working: PathBuf,
    /// Read-only factory chart used by reset
    #[serde(default = "default_factory")]
    pub factory: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            working: default_working(),
            factory: default_factory(),
        }
    }
}

fn default_working() -> PathBuf {
    PathBuf::from("pokemon_type_config.json")
}
fn default_factory() -> PathBuf {
    PathBuf::from("data/factory_chart.json")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// off, error, warn, info, debug or trace
    #[serde(default = "default_level")]
    pub level: String,
    /// Log destination; the terminal belongs to the UI
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.level.parse().map_err(|_| {
            ConfigError::ValidationError(format!("unknown log level '{}'", self.level))
        })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_level(),
            file: default_log_file(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
fn default_log_file() -> PathBuf {
    PathBuf::from("type_chart.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChartConfig::default();
        assert_eq!(config.paths.working, PathBuf::from("pokemon_type_config.json"));
        assert_eq!(config.paths.factory, PathBuf::from("data/factory_chart.json"));
        assert_eq!(config.logging.level_filter().unwrap(), log::LevelFilter::Info);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[paths]
working = "saves/mine.json"
factory = "factory.json"

[logging]
level = "debug"
file = "chart.log"
"#;

        let config = ChartConfig::from_toml(toml).unwrap();
        assert_eq!(config.paths.working, PathBuf::from("saves/mine.json"));
        assert_eq!(config.paths.factory, PathBuf::from("factory.json"));
        assert_eq!(config.logging.level_filter().unwrap(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = ChartConfig::from_toml("[logging]\nlevel = \"warn\"\n").unwrap();
        assert_eq!(config.paths, PathsConfig::default());
        assert_eq!(config.logging.file, PathBuf::from("type_chart.log"));

        let empty = ChartConfig::from_toml("").unwrap();
        assert_eq!(empty, ChartConfig::default());
    }

    #[test]
    fn test_rejects_bad_level() {
        let err = ChartConfig::from_toml("[logging]\nlevel = \"loud\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_empty_path() {
        let err = ChartConfig::from_toml("[paths]\nworking = \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_invalid_toml() {
        let err = ChartConfig::from_toml("[paths\nworking = 1").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ChartConfig::load_or_default(&dir.path().join("chart.toml")).unwrap();
        assert_eq!(config, ChartConfig::default());
    }
}
