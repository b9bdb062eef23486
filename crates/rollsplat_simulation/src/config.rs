//! Загрузка BallConfig из JSON
//!
//! ```json
//! { "speed": 12.0, "min_swipe_recognition": 400 }
//! ```
//! Отсутствующие поля берутся из `BallConfig::default()`, громкости зажимаются в [0, 1].

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::components::BallConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse ball config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid ball config: {0}")]
    Invalid(String),
}

impl BallConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: BallConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config.sanitized())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "speed must be positive, got {}",
                self.speed
            )));
        }

        if !self.min_swipe_recognition.is_finite() || self.min_swipe_recognition < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_swipe_recognition must be non-negative, got {}",
                self.min_swipe_recognition
            )));
        }

        Ok(())
    }
}

/// Прочитать и распарсить конфиг с диска
pub fn load_ball_config(path: impl AsRef<Path>) -> Result<BallConfig, ConfigError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = BallConfig::from_json_str(&json)?;
    crate::log_info(&format!("⚙️ Ball config loaded from {}: {:?}", path.display(), config));
    Ok(config)
}
