//! Runtime settings
//!
//! Read from a JSON file at startup. Every field has a default so a partial
//! file is fine; world size and physics constants are not configurable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Settings file looked up in the working directory when none is given
pub const DEFAULT_SETTINGS_FILE: &str = "sky_hop.json";

/// Paths of the three required sprites
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub background: PathBuf,
    pub player: PathBuf,
    pub platform: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            background: PathBuf::from("bg.png"),
            player: PathBuf::from("ball.png"),
            platform: PathBuf::from("desk.png"),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Sprite locations
    pub assets: AssetPaths,
    /// Fixed run seed (None = fresh random seed each run)
    pub seed: Option<u64>,
    /// Wait for vertical blank when presenting
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Doodle Jump".to_string(),
            assets: AssetPaths::default(),
            seed: None,
            vsync: false,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from an explicit path. Missing or malformed files are errors.
    pub fn load_from(path: &Path) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path).map_err(|e| GameError::Settings {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let settings = Self::from_json(&json).map_err(|e| GameError::Settings {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from `path` if given, otherwise from the default file
    /// when it exists, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, GameError> {
        if let Some(path) = path {
            return Self::load_from(path);
        }
        let default_path = Path::new(DEFAULT_SETTINGS_FILE);
        if default_path.exists() {
            return Self::load_from(default_path);
        }
        log::info!("Using default settings");
        Ok(Self::default())
    }

    /// The seed to use for this run
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Presentation mode for the swap chain
    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}
