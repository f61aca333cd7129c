//! Client configuration.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::entities::{Settings, DEFAULT_API_URL};
use crate::errors::{ClientError, ClientResult};

/// Resolve the client directory: `$SMART_TODO_HOME`, else `$HOME/.smart-todo`.
pub fn client_dir() -> ClientResult<PathBuf> {
    if let Ok(dir) = std::env::var("SMART_TODO_HOME") {
        return Ok(PathBuf::from(dir));
    }

    std::env::var("HOME")
        .map(|home| PathBuf::from(home).join(".smart-todo"))
        .map_err(|_| ClientError::ConfigError {
            reason: "neither SMART_TODO_HOME nor HOME is set".to_string(),
        })
}

/// Settings facade over the persisted config file.
pub struct ConfigStore {
    config_path: PathBuf,
}

impl ConfigStore {
    /// Create a store rooted at the client directory.
    pub fn new(client_dir: impl AsRef<Path>) -> Self {
        Self {
            config_path: client_dir.as_ref().join("config.json"),
        }
    }

    /// Load settings; a missing file yields defaults.
    pub async fn load(&self) -> ClientResult<Settings> {
        match fs::read_to_string(&self.config_path).await {
            Ok(content) => {
                let settings: Settings = serde_json::from_str(&content)?;
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(e) => Err(ClientError::FileReadError {
                path: self.config_path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Save settings.
    pub async fn save(&self, settings: &Settings) -> ClientResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.config_path, content)
            .await
            .map_err(|e| ClientError::FileWriteError {
                path: self.config_path.display().to_string(),
                reason: e.to_string(),
            })
    }

    /// Persist a new API base URL.
    pub async fn set_api_url(&self, url: impl Into<String>) -> ClientResult<()> {
        let mut settings = self.load().await?;
        settings.api_url = Some(url.into());
        self.save(&settings).await
    }

    /// Resolve the API base URL: explicit override (flag or env) first, then
    /// the persisted setting, then the default.
    pub async fn resolve_api_url(&self, override_url: Option<&str>) -> ClientResult<String> {
        if let Some(url) = override_url {
            return Ok(url.trim_end_matches('/').to_string());
        }

        let settings = self.load().await?;
        Ok(settings
            .api_url
            .as_deref()
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string())
    }
}
