use dirs::home_dir;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

pub const DATA_DIR_ENV: &str = "BANK_MANAGER_DATA_DIR";
pub const DATABASE_URL_ENV: &str = "BANK_DATABASE_URL";
const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppPreferences {
    pub database_url: Option<String>,
    pub is_dark_mode: bool,
    pub font_size: f32,
    /// Create the bank tables on startup when they are missing.
    pub bootstrap_schema: bool,
    pub max_connections: u32,
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            database_url: None,
            is_dark_mode: false,
            font_size: 14.0,
            bootstrap_schema: true,
            max_connections: 4,
        }
    }
}

impl AppPreferences {
    /// Read preferences from `dir`; a missing or unreadable file gives defaults.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(PREFERENCES_FILE);
        if !path.exists() {
            info!("No preferences at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from_json(&path) {
            Ok(prefs) => {
                info!(
                    "Loaded prefs from JSON: database_url={:?}, is_dark_mode={}, font_size={}, bootstrap_schema={}",
                    prefs.database_url, prefs.is_dark_mode, prefs.font_size, prefs.bootstrap_schema
                );
                prefs
            }
            Err(e) => {
                warn!("Ignoring preferences at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn load_from_json(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, dir: &Path) -> Result<(), AppError> {
        fs::create_dir_all(dir)?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(dir.join(PREFERENCES_FILE), content)?;
        info!("Saved prefs to {}", dir.display());
        Ok(())
    }

    /// Environment first, then the saved URL, then a SQLite file in `data_dir`.
    pub fn resolve_database_url(&self, data_dir: &Path) -> String {
        if let Ok(url) = std::env::var(DATABASE_URL_ENV)
            && !url.trim().is_empty()
        {
            return url;
        }
        self.database_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| default_database_url(data_dir))
    }
}

pub fn default_database_url(data_dir: &Path) -> String {
    format!("sqlite://{}?mode=rwc", data_dir.join("bank.db").to_string_lossy())
}

pub fn get_data_dir() -> PathBuf {
    // Try to get custom data directory from environment variable first
    if let Ok(custom_dir) = std::env::var(DATA_DIR_ENV) {
        let path = PathBuf::from(custom_dir);
        if path.is_absolute() {
            return path;
        }
    }

    // Default to ~/.bank-manager
    if let Some(mut hd) = home_dir() {
        hd.push(".bank-manager");
        return hd;
    }
    PathBuf::from(".")
}

pub fn ensure_data_dir() -> Result<PathBuf, AppError> {
    let dir = get_data_dir();
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bank-manager-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = scratch_dir("missing");
        assert_eq!(AppPreferences::load(&dir), AppPreferences::default());
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = scratch_dir("save");
        let prefs = AppPreferences {
            database_url: Some("sqlite://bank.db".into()),
            is_dark_mode: true,
            font_size: 16.0,
            bootstrap_schema: false,
            max_connections: 2,
        };
        prefs.save(&dir).unwrap();
        assert_eq!(AppPreferences::load(&dir), prefs);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = scratch_dir("corrupt");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(PREFERENCES_FILE), "{ not json").unwrap();
        assert_eq!(AppPreferences::load(&dir), AppPreferences::default());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let dir = scratch_dir("partial");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(PREFERENCES_FILE), r#"{"is_dark_mode": true}"#).unwrap();
        let prefs = AppPreferences::load(&dir);
        assert!(prefs.is_dark_mode);
        assert_eq!(prefs.font_size, 14.0);
        assert!(prefs.bootstrap_schema);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn saved_url_beats_default() {
        let dir = PathBuf::from("/tmp/bank");
        let prefs = AppPreferences {
            database_url: Some("sqlite::memory:".into()),
            ..Default::default()
        };
        if std::env::var(DATABASE_URL_ENV).is_err() {
            assert_eq!(prefs.resolve_database_url(&dir), "sqlite::memory:");
            assert_eq!(
                AppPreferences::default().resolve_database_url(&dir),
                "sqlite:///tmp/bank/bank.db?mode=rwc"
            );
        }
    }
}
