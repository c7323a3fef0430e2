//! Player-facing settings
//!
//! Read once at startup from a JSON file. Gameplay tuning is not here; it
//! lives in `consts`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Environment variable naming an alternative settings file.
pub const SETTINGS_ENV: &str = "SUPER_JUMPER_SETTINGS";
/// Settings file looked up in the working directory by default.
pub const DEFAULT_SETTINGS_FILE: &str = "super_jumper.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame-rate cap for the main loop.
    pub target_fps: u32,
    /// Ring the terminal bell for sounds whose asset is present.
    pub sound: bool,
    /// Directory holding sprite and sound assets.
    pub asset_dir: PathBuf,
    /// Log destination; `None` disables logging entirely.
    pub log_file: Option<PathBuf>,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: 60,
            sound: true,
            asset_dir: PathBuf::from("assets"),
            log_file: Some(PathBuf::from("super_jumper.log")),
            seed: None,
        }
    }
}

impl Settings {
    /// Where settings are read from: `$SUPER_JUMPER_SETTINGS`, or
    /// `super_jumper.json` in the working directory.
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    /// Parse a settings file.
    pub fn from_file(path: &Path) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path).map_err(|source| GameError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| GameError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings if a file exists at `path`. `Ok(None)` means "use the
    /// defaults"; callers treat errors as non-fatal too.
    pub fn load(path: &Path) -> Result<Option<Self>, GameError> {
        if !path.exists() {
            return Ok(None);
        }
        Self::from_file(path).map(Some)
    }

    /// Time budget of one frame. A zero fps setting is treated as 1.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }
}
