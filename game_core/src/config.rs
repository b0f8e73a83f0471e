use crate::params::Params;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Game configuration
///
/// Every field falls back to its [`Params`] default, so a TOML file only
/// needs to name the values it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub win_score: u32,
    pub ball_spawn_interval: u64,
    pub powerup_spawn_interval: u64,
    pub max_balls: usize,
    pub max_powerups: usize,
    pub tick_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            win_score: Params::WIN_SCORE,
            ball_spawn_interval: Params::BALL_SPAWN_INTERVAL,
            powerup_spawn_interval: Params::POWERUP_SPAWN_INTERVAL,
            max_balls: Params::MAX_BALLS,
            max_powerups: Params::MAX_POWERUPS,
            tick_ms: Params::TICK_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document and validate the result
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "field must have a positive size, got {}x{}",
                self.field_width, self.field_height
            )));
        }
        if self.paddle_width <= 0.0 || self.paddle_height <= 0.0 {
            return Err(ConfigError::Invalid(
                "paddle dimensions must be positive".to_string(),
            ));
        }
        if self.paddle_height > self.field_height {
            return Err(ConfigError::Invalid(format!(
                "paddle height {} exceeds field height {}",
                self.paddle_height, self.field_height
            )));
        }
        if self.ball_spawn_interval == 0 || self.powerup_spawn_interval == 0 {
            return Err(ConfigError::Invalid(
                "spawn intervals must be at least one tick".to_string(),
            ));
        }
        if self.max_balls == 0 || self.max_powerups == 0 {
            return Err(ConfigError::Invalid(
                "max_balls and max_powerups must be at least 1".to_string(),
            ));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::Invalid("tick_ms must be at least 1".to_string()));
        }
        Ok(())
    }
}
