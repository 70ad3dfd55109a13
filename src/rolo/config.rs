use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for rolo, stored in <home>/config.json
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoloConfig {
    /// Phonebook used when a command is run without a file argument
    #[serde(default)]
    pub default_book: Option<PathBuf>,
}

impl RoloConfig {
    /// Read config from the given directory, falling back to defaults when
    /// no file exists yet
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RoloConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// The default book path as printable text, "unset" when absent
    pub fn default_book_display(&self) -> String {
        match &self.default_book {
            Some(path) => path.display().to_string(),
            None => "unset".to_string(),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-book" => Some(self.default_book_display()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "default-book" => {
                if value.is_empty() {
                    return Err("default-book cannot be empty".to_string());
                }
                self.default_book = Some(PathBuf::from(value));
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RoloConfig::default();
        assert_eq!(config.default_book, None);
        assert_eq!(config.default_book_display(), "unset");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = RoloConfig::load(dir.path().join("nowhere")).unwrap();
        assert_eq!(config, RoloConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let mut config = RoloConfig::default();
        config.set("default-book", "/tmp/book.txt").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = RoloConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.default_book, Some(PathBuf::from("/tmp/book.txt")));
    }

    #[test]
    fn test_save_creates_the_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deep").join("home");

        RoloConfig::default().save(&nested).unwrap();
        assert!(nested.join("config.json").exists());
    }

    #[test]
    fn test_set_unknown_key() {
        let mut config = RoloConfig::default();
        assert!(config.set("nope", "x").is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = RoloConfig {
            default_book: Some(PathBuf::from("book.txt")),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: RoloConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
