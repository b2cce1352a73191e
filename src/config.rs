//! Configuration - optional `inventory.toml` merged with CLI flags

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE: &str = "inventory.db";
pub const DEFAULT_STYLESHEET: &str = "style.toml";
pub const DEFAULT_LOG_FILE: &str = "inventory.log";

/// Contents of `inventory.toml`; every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct InventoryConfig {
    pub database: Option<String>,
    pub stylesheet: Option<String>,
    pub log_file: Option<String>,
}

/// Paths the program runs with after flags, config file and defaults are
/// merged, in that order of precedence.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub database: PathBuf,
    pub stylesheet: PathBuf,
    pub log_file: PathBuf,
}

impl Settings {
    pub fn resolve(
        config: Option<&InventoryConfig>,
        database: Option<PathBuf>,
        stylesheet: Option<PathBuf>,
    ) -> Self {
        let config = config.cloned().unwrap_or_default();

        Self {
            database: database
                .or_else(|| config.database.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE)),
            stylesheet: stylesheet
                .or_else(|| config.stylesheet.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STYLESHEET)),
            log_file: config
                .log_file
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("inventory.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<InventoryConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: InventoryConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config() {
        let settings = Settings::resolve(None, None, None);
        assert_eq!(settings.database, PathBuf::from("inventory.db"));
        assert_eq!(settings.stylesheet, PathBuf::from("style.toml"));
        assert_eq!(settings.log_file, PathBuf::from("inventory.log"));
    }

    #[test]
    fn test_flags_override_config() {
        let config = InventoryConfig {
            database: Some("stock/items.db".to_string()),
            stylesheet: Some("dark.toml".to_string()),
            log_file: None,
        };
        let settings = Settings::resolve(Some(&config), Some(PathBuf::from("cli.db")), None);
        assert_eq!(settings.database, PathBuf::from("cli.db"));
        assert_eq!(settings.stylesheet, PathBuf::from("dark.toml"));
        assert_eq!(settings.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("inventory.toml");
        assert_eq!(load_config(Some(&path)).unwrap(), None);

        std::fs::write(&path, "database = \"shop.db\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(config.database.as_deref(), Some("shop.db"));
        assert_eq!(config.stylesheet, None);

        std::fs::write(&path, "database = 3\n").unwrap();
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_ensure_db_dir_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let db = temp_dir.path().join("nested").join("inventory.db");
        ensure_db_dir(&db).unwrap();
        assert!(db.parent().unwrap().is_dir());
        ensure_db_dir(Path::new("inventory.db")).unwrap();
    }
}
