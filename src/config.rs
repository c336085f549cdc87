//! Configuration file handling.
//!
//! Loads configuration from `~/.config/obscura/config.toml` or a custom path.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::parameter::{biggest_size, smallest_size, InitialParameters, SizeSelector};
use crate::routine::photo::PictureMode;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
}

#[derive(Debug, Deserialize)]
pub struct CameraConfig {
    /// Capture sequence to use when none is requested explicitly.
    #[serde(default)]
    pub picture_mode: PictureMode,
    /// JPEG quality for encoded photos (1-100).
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
    /// Which of the supported picture sizes to pick.
    #[serde(default)]
    pub photo_size: SizePreference,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            picture_mode: PictureMode::default(),
            jpeg_quality: default_jpeg_quality(),
            photo_size: SizePreference::default(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct PreviewConfig {
    /// Which of the supported preview sizes to pick.
    #[serde(default)]
    pub size: SizePreference,
}

/// Preference over a set of supported sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizePreference {
    #[default]
    Biggest,
    Smallest,
}

impl SizePreference {
    pub fn selector(self) -> SizeSelector {
        match self {
            SizePreference::Biggest => biggest_size(),
            SizePreference::Smallest => smallest_size(),
        }
    }

    fn selector_fn(self) -> fn() -> SizeSelector {
        match self {
            SizePreference::Biggest => biggest_size,
            SizePreference::Smallest => smallest_size,
        }
    }
}

fn default_jpeg_quality() -> u8 {
    90
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.clone(),
                source: e,
            })?;
            Ok(config)
        } else {
            log::debug!("no config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Start-up parameter selection derived from this configuration.
    pub fn initial_parameters(&self) -> InitialParameters {
        InitialParameters {
            photo_size_selector: self.camera.photo_size.selector(),
            preview_size_selector: self.preview.size.selector_fn(),
            jpeg_quality: self.camera.jpeg_quality,
            ..Default::default()
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("obscura").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/obscura/config.toml")
        })
}
