use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// The terminal (our only rendering surface and input source) failed.
    #[error("terminal I/O failed")]
    Terminal(#[from] std::io::Error),

    #[error("failed to read settings from {path}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings in {path}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read sprite {path}")]
    SpriteRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("sprite {0} has no drawable rows")]
    EmptySprite(String),
}
