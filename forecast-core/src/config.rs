use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::ConfigError;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// User defaults stored on disk.
///
/// Example TOML:
/// default_city = "Seattle"
/// default_condition = "rainy"
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// City used by `forecast record` when none is given.
    pub default_city: Option<String>,

    /// Condition used by `forecast record` when none is given.
    pub default_condition: Option<String>,
}

impl Config {
    pub fn default_city(&self) -> Option<&str> {
        self.default_city.as_deref()
    }

    pub fn default_condition(&self) -> Option<&str> {
        self.default_condition.as_deref()
    }

    pub fn set_default_city(&mut self, city: impl Into<String>) {
        self.default_city = Some(city.into());
    }

    pub fn set_default_condition(&mut self, condition: impl Into<String>) {
        self.default_condition = Some(condition.into());
    }

    /// Load config from the platform config dir, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Save config to the platform config dir.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let toml = toml::to_string_pretty(self)?;

        fs::write(path, toml).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast-recorder", "forecast")
            .ok_or(ConfigError::NoConfigDir)?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from(&dir.path().join("config.toml")).expect("load must succeed");

        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.default_city(), None);
        assert_eq!(cfg.default_condition(), None);
    }

    #[test]
    fn save_then_load_keeps_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.set_default_city("Seattle");
        cfg.set_default_condition("rainy");
        cfg.save_to(&path).expect("save must succeed");

        let loaded = Config::load_from(&path).expect("load must succeed");
        assert_eq!(loaded.default_city(), Some("Seattle"));
        assert_eq!(loaded.default_condition(), Some("rainy"));
    }

    #[test]
    fn partial_file_is_accepted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_city = \"Paris\"\n").expect("write");

        let cfg = Config::load_from(&path).expect("load must succeed");
        assert_eq!(cfg.default_city(), Some("Paris"));
        assert_eq!(cfg.default_condition(), None);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_city = [").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn set_default_city_overrides_previous() {
        let mut cfg = Config::default();

        cfg.set_default_city("Paris");
        cfg.set_default_city("Berlin");

        assert_eq!(cfg.default_city(), Some("Berlin"));
    }
}
