use crate::error::{LostFoundError, Result};
use crate::model::Role;
use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// When to emit ANSI styling.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Session configuration, read from `config.json`. Never written back.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LostFoundConfig {
    /// Role of whoever runs the session
    pub role: Role,

    /// Terminal styling
    pub color: ColorMode,
}

impl LostFoundConfig {
    /// Load config from an explicit file. A missing file is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(LostFoundError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let config: LostFoundConfig = serde_json::from_str(&content)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `config.json` from a directory, or return defaults if absent.
    pub fn load_from_dir<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load(config_path)
    }

    /// Platform config directory, e.g. `~/.config/lostfound`.
    pub fn default_dir() -> Option<PathBuf> {
        ProjectDirs::from("edu", "campus", "lostfound").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Explicit path wins; otherwise the platform directory; otherwise defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::default_dir() {
                Some(dir) => Self::load_from_dir(dir),
                None => Ok(Self::default()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LostFoundConfig::default();
        assert_eq!(config.role, Role::Admin);
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn test_load_from_missing_dir_is_default() {
        let temp = TempDir::new().unwrap();
        let config = LostFoundConfig::load_from_dir(temp.path().join("nope")).unwrap();
        assert_eq!(config, LostFoundConfig::default());
    }

    #[test]
    fn test_load_explicit_missing_file_errors() {
        let temp = TempDir::new().unwrap();
        let err = LostFoundConfig::load(temp.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, LostFoundError::Config(_)));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{ "role": "regular" }"#).unwrap();

        let config = LostFoundConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.role, Role::Regular);
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, r#"{ "role": "janitor" }"#).unwrap();

        let err = LostFoundConfig::load(&path).unwrap_err();
        assert!(matches!(err, LostFoundError::Serialization(_)));
    }

    #[test]
    fn test_discover_prefers_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.json");
        fs::write(&path, r#"{ "color": "never" }"#).unwrap();

        let config = LostFoundConfig::discover(Some(path.as_path())).unwrap();
        assert_eq!(config.color, ColorMode::Never);
    }
}
