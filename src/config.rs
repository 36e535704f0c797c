use std::path::Path;

use tracing::warn;

use crate::board::Board;
use crate::error::ConfigError;

/// Longest accepted automatic reset delay
pub const MAX_RESET_DELAY_SECS: u64 = 3600;

/// Game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Seconds the finished board stays on screen before a new round
    pub reset_delay_secs: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 15,
            height: 15,
            reset_delay_secs: 5,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Board::new(self.width, self.height)?;
        if self.reset_delay_secs > MAX_RESET_DELAY_SECS {
            return Err(ConfigError::Validation(format!(
                "reset_delay_secs must be <= {MAX_RESET_DELAY_SECS}"
            )));
        }
        Ok(())
    }
}
