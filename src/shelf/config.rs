use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Data file used when neither the command line nor the config names one.
/// Relative, so it resolves against the working directory.
pub const DEFAULT_DATA_FILE: &str = "books.json";

pub const KEY_DATA_FILE: &str = "data-file";

/// Configuration for shelf, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Default data file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ShelfConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(Self::path_in(config_dir), content)?;
        Ok(())
    }

    pub fn path_in<P: AsRef<Path>>(config_dir: P) -> PathBuf {
        config_dir.as_ref().join(CONFIG_FILENAME)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_DATA_FILE => Some(
                self.data_file
                    .as_deref()
                    .unwrap_or_else(|| Path::new(DEFAULT_DATA_FILE))
                    .display()
                    .to_string(),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_DATA_FILE => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(ShelfError::Config(format!("{} cannot be empty", key)));
                }
                self.data_file = Some(PathBuf::from(value));
                Ok(())
            }
            _ => Err(ShelfError::Config(format!("Unknown config key: {}", key))),
        }
    }

    /// Pick the data file: explicit override, then config, then the default
    /// name. Relative paths resolve against `cwd`.
    pub fn resolve_data_file(&self, cli_override: Option<&Path>, cwd: &Path) -> PathBuf {
        let chosen = cli_override
            .or(self.data_file.as_deref())
            .unwrap_or_else(|| Path::new(DEFAULT_DATA_FILE));
        if chosen.is_absolute() {
            chosen.to_path_buf()
        } else {
            cwd.join(chosen)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = ShelfConfig::load(temp.path()).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested");

        let mut config = ShelfConfig::default();
        config.set(KEY_DATA_FILE, "/srv/library.json").unwrap();
        config.save(&dir).unwrap();

        let loaded = ShelfConfig::load(&dir).unwrap();
        assert_eq!(loaded.data_file, Some(PathBuf::from("/srv/library.json")));
    }

    #[test]
    fn test_corrupt_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(ShelfConfig::path_in(temp.path()), "{not json").unwrap();
        assert!(matches!(
            ShelfConfig::load(temp.path()),
            Err(ShelfError::Serialization(_))
        ));
    }

    #[test]
    fn test_get_reports_default() {
        let config = ShelfConfig::default();
        assert_eq!(config.get(KEY_DATA_FILE).as_deref(), Some(DEFAULT_DATA_FILE));
        assert_eq!(config.get("colour"), None);
    }

    #[test]
    fn test_set_rejects_unknown_and_empty() {
        let mut config = ShelfConfig::default();
        assert!(matches!(config.set("colour", "red"), Err(ShelfError::Config(_))));
        assert!(matches!(config.set(KEY_DATA_FILE, " "), Err(ShelfError::Config(_))));
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_resolve_precedence() {
        let cwd = Path::new("/work");
        let mut config = ShelfConfig::default();
        assert_eq!(
            config.resolve_data_file(None, cwd),
            PathBuf::from("/work/books.json")
        );

        config.data_file = Some(PathBuf::from("lib/catalog.json"));
        assert_eq!(
            config.resolve_data_file(None, cwd),
            PathBuf::from("/work/lib/catalog.json")
        );

        assert_eq!(
            config.resolve_data_file(Some(Path::new("/tmp/other.json")), cwd),
            PathBuf::from("/tmp/other.json")
        );
    }
}
