//! Game settings and preferences
//!
//! Read from a JSON file next to the binary; anything missing falls back to
//! defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::GAME_FPS;
use crate::error::ConfigError;
use crate::renderer::SpriteMetrics;
use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation and display rate
    pub fps: u32,
    /// Fixed RNG seed; a time-based one is used when absent
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Headless runner ===
    /// Frames the autopilot plays before quitting
    pub demo_frames: u64,

    /// HUD image sizes
    pub sprites: SpriteMetrics,
    /// Gameplay constants
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: GAME_FPS,
            seed: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            demo_frames: 30 * 60,

            sprites: SpriteMetrics::default(),
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Settings file looked up in the working directory
    pub const FILE_NAME: &'static str = "flappy_settings.json";

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and validate a settings file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from the working directory, falling back to defaults
    pub fn load() -> Self {
        let path = Path::new(Self::FILE_NAME);
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::invalid("fps", "must be at least 1"));
        }
        self.tuning.validate()
    }

    /// Configured seed, or one derived from the clock
    pub fn seed_or_now(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
