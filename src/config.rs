//! Startup configuration
//!
//! Read from `~/.config/livepad/config.yaml`. The file only supplies
//! defaults for a session; livepad never writes it.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config_paths::ConfigPaths;
use crate::debounce::RENDER_DEBOUNCE_MS;
use crate::model::{LayoutKind, RenderSettings, DEFAULT_FONT_SIZE};

/// Playground defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaygroundConfig {
    /// Editor font size in px (clamped to 10–24)
    #[serde(default = "default_font_size")]
    pub font_size: u8,
    #[serde(default)]
    pub dark_mode: bool,
    /// One of `horizontal`, `vertical`, `tabs`, `focus`
    #[serde(default)]
    pub layout: LayoutKind,
    /// Quiet period after the last edit before the preview re-renders
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_font_size() -> u8 {
    DEFAULT_FONT_SIZE
}

fn default_debounce_ms() -> u64 {
    RENDER_DEBOUNCE_MS
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            dark_mode: false,
            layout: LayoutKind::default(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Errors that can occur when reading the config file
#[derive(Debug, Clone)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl PlaygroundConfig {
    /// Load config from disk, or return defaults if not found or invalid
    pub fn load() -> Self {
        let Some(path) = ConfigPaths::discover().map(|paths| paths.config_file()) else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        // An empty file deserializes as unit; treat it as "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings::new(self.font_size, self.dark_mode, self.layout)
    }
}
