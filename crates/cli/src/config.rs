//! Configuration file loading for the terminal front end.
//!
//! Settings live in `jaque.toml` in the current directory. Every field is
//! optional; command-line flags override whatever the file provides.

use chess_core::Color;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Difficulty presets mapped onto search depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl Difficulty {
    /// Search depth the engine uses at this difficulty.
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
        }
    }
}

/// Front end configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Engine the human plays against ("minimax" or "random").
    #[serde(default = "default_engine")]
    pub engine: String,
    /// Color the human plays ("white" or "black").
    #[serde(default = "default_color")]
    pub color: String,
    /// Difficulty preset; ignored when an explicit depth is set.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Explicit search depth override.
    #[serde(default)]
    pub depth: Option<u8>,
}

fn default_engine() -> String {
    "minimax".to_string()
}

fn default_color() -> String {
    "white".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            color: default_color(),
            difficulty: Difficulty::default(),
            depth: None,
        }
    }
}

impl Config {
    /// Loads the configuration from disk.
    ///
    /// Returns the default configuration when no file exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be
    /// read, or [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("jaque.toml")
    }

    /// Depth the engine searches at; an explicit depth beats the preset.
    pub fn search_depth(&self) -> u8 {
        self.depth.unwrap_or_else(|| self.difficulty.depth())
    }

    /// Color the human plays. Anything other than "black" means White.
    pub fn human_color(&self) -> Color {
        if self.color.eq_ignore_ascii_case("black") {
            Color::Black
        } else {
            Color::White
        }
    }
}
