//! Main application configuration
//!
//! Defines the configuration structures for the leaderboard tool, loaded from
//! environment variables or a TOML file, then validated.

use crate::error::LeaderboardError;
use crate::ranking::collation::{NameCollator, DEFAULT_LOCALE};
use crate::ranking::SortDirection;
use crate::types::Game;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub leaderboard: LeaderboardSettings,
}

/// Process-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name used in log output
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Leaderboard defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardSettings {
    /// Game shown when none is chosen
    pub default_game: Game,
    /// Sort direction used when none is chosen
    pub default_direction: SortDirection,
    /// Size of the top snapshot
    pub top_n: usize,
    /// BCP-47 locale used to order names
    pub collation_locale: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "wild-horses".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for LeaderboardSettings {
    fn default() -> Self {
        Self {
            default_game: Game::Tft,
            default_direction: SortDirection::Descending,
            top_n: 5,
            collation_locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; environment variables still win
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from TOML text without validating it
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Leaderboard settings
        if let Ok(game) = env::var("DEFAULT_GAME") {
            self.leaderboard.default_game = game
                .parse()
                .map_err(|_| LeaderboardError::UnknownGame { value: game.clone() })?;
        }
        if let Ok(direction) = env::var("DEFAULT_DIRECTION") {
            self.leaderboard.default_direction = direction
                .parse()
                .map_err(|_| LeaderboardError::InvalidDirection {
                    value: direction.clone(),
                })?;
        }
        if let Ok(top_n) = env::var("TOP_N") {
            self.leaderboard.top_n = top_n
                .parse()
                .map_err(|_| anyhow!("Invalid TOP_N value: {}", top_n))?;
        }
        if let Ok(locale) = env::var("COLLATION_LOCALE") {
            self.leaderboard.collation_locale = locale;
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    // Validate leaderboard settings
    if config.leaderboard.top_n == 0 {
        return Err(anyhow!("Top N must be greater than 0"));
    }
    NameCollator::try_new(&config.leaderboard.collation_locale)?;

    Ok(())
}
