//! Per-session player configuration.
//!
//! Every player session carries its own source configuration, so multiple
//! concurrent players can point at different sprite maps and posters; there
//! are no process-wide source constants.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Sources and initial settings for one player session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Path of the sprite-map file for scrub previews
    pub sprite_map: String,
    /// Poster image shown before playback starts
    pub poster: Option<String>,
    /// Initial volume in `[0, 1]`
    pub initial_volume: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            sprite_map: "thumbnails.vtt".to_string(),
            poster: None,
            initial_volume: 1.0,
        }
    }
}

impl PlayerConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse player config")
    }

    /// Load a configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&text)
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize player config")
    }
}
