use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;

use crate::shared::errors::{AppError, AppResult};
use crate::shared::types::Language;

/// Quiet period before an interactive conversion is written to history
pub const DEFAULT_DEBOUNCE_MS: u64 = 800;

const STATE_FILE_NAME: &str = "land_calculator.redb";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Location of the state database. `None` means the platform data directory.
    pub storage_path: Option<PathBuf>,
    pub debounce_ms: u64,
    /// Language used until the user picks one
    pub default_language: Language,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            storage_path: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            default_language: Language::Hi,
        }
    }
}

fn project_dirs() -> AppResult<ProjectDirs> {
    ProjectDirs::from("com", "landcalc", "land-calculator")
        .ok_or_else(|| AppError::Config("Failed to determine project directories".to_string()))
}

impl AppSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        Ok(project_dirs()?.config_dir().join("settings.json"))
    }

    /// Load settings from the default location, writing defaults on first run
    pub async fn load() -> AppResult<Self> {
        Self::load_from(&Self::get_settings_path()?).await
    }

    pub async fn load_from(path: &Path) -> AppResult<Self> {
        if !fs::try_exists(path).await? {
            let settings = Self::default();
            settings.save_to(path).await?;
            return Ok(settings);
        }

        let content = fs::read_to_string(path).await?;
        serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse settings: {}", e)))
    }

    pub async fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Resolved state database path
    pub fn state_path(&self) -> AppResult<PathBuf> {
        match &self.storage_path {
            Some(path) => Ok(path.clone()),
            None => Ok(project_dirs()?.data_dir().join(STATE_FILE_NAME)),
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings::load_from(&path).await.unwrap();
        assert_eq!(settings, AppSettings::default());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"debounce_ms": 250, "default_language": "en"}"#).unwrap();

        let settings = AppSettings::load_from(&path).await.unwrap();
        assert_eq!(settings.debounce(), Duration::from_millis(250));
        assert_eq!(settings.default_language, Language::En);
        assert_eq!(settings.storage_path, None);
    }

    #[tokio::test]
    async fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        let err = AppSettings::load_from(&path).await.unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_explicit_storage_path_wins() {
        let settings = AppSettings {
            storage_path: Some(PathBuf::from("/tmp/state.redb")),
            ..AppSettings::default()
        };
        assert_eq!(settings.state_path().unwrap(), PathBuf::from("/tmp/state.redb"));
    }
}
