use crate::error::{AppError, Result};
use crate::models::RestaurantInfo;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tauri::{AppHandle, Manager};
use tracing::{info, warn};

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub restaurant: RestaurantInfo,
    /// Simulated reservation round trip.
    pub submission_delay_ms: u64,
    /// How long the splash/loading state is held after startup.
    pub splash_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            restaurant: RestaurantInfo::default(),
            submission_delay_ms: 500,
            splash_delay_ms: 100,
        }
    }
}

impl AppConfig {
    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }

    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads `path` if it exists; a missing file means defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Loads `config.json` from the app config dir. A broken file is logged and
    /// replaced by defaults so the site still opens.
    pub fn load(app_handle: &AppHandle) -> Self {
        let path = match config_path(app_handle) {
            Ok(path) => path,
            Err(e) => {
                warn!(error = %e, "no config directory, using defaults");
                return Self::default();
            }
        };

        Self::from_path_or_default(&path)
    }

    /// Like `from_path`, but an unreadable or malformed file is logged and
    /// yields defaults.
    pub fn from_path_or_default(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(config) => {
                info!(path = %path.display(), "configuration loaded");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "invalid configuration, using defaults");
                Self::default()
            }
        }
    }
}

fn config_path(app_handle: &AppHandle) -> Result<PathBuf> {
    let dir = app_handle
        .path()
        .app_config_dir()
        .map_err(|e| AppError::Config(e.to_string()))?;
    Ok(dir.join(CONFIG_FILE))
}
