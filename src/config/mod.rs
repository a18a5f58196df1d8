pub mod path;

#[cfg(test)]
mod config_test;

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_GPU_CARD, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, DEFAULT_TOUCH_DEVICE,
};

/// Represents all possible errors loading a [Config]
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read: {0}")]
    IoError(#[from] io::Error),
    #[error("Unable to deserialize: {0}")]
    DeserializeError(#[from] serde_yaml::Error),
}

/// Configuration for the touchfb tools. Every field is optional and falls
/// back to the defaults in [crate::constants].
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Path to the touchscreen event device, e.g. "/dev/input/event0"
    pub touch_device: Option<String>,
    /// Size of the screen the touch positions are projected onto
    pub screen: Option<ScreenConfig>,
    /// Path to the DRM card used for presenting frames
    pub gpu_card: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
}

impl Config {
    /// Load a [Config] from the given YAML string
    pub fn from_yaml(content: String) -> Result<Config, LoadError> {
        let config: Config = serde_yaml::from_str(content.as_str())?;
        Ok(config)
    }

    /// Load a [Config] from the given YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Config, LoadError> {
        let file = std::fs::File::open(path)?;
        let config: Config = serde_yaml::from_reader(file)?;
        Ok(config)
    }

    /// Load the config from the first config file found on the system, or
    /// the defaults if there is none.
    pub fn load() -> Result<Config, LoadError> {
        let Some(path) = path::get_config_path() else {
            log::debug!("No config file found. Using defaults.");
            return Ok(Config::default());
        };
        log::debug!("Loading config from: {}", path.display());
        Config::from_yaml_file(path)
    }

    pub fn touch_device(&self) -> &str {
        self.touch_device.as_deref().unwrap_or(DEFAULT_TOUCH_DEVICE)
    }

    pub fn gpu_card(&self) -> &str {
        self.gpu_card.as_deref().unwrap_or(DEFAULT_GPU_CARD)
    }

    /// Returns the configured screen size as (width, height)
    pub fn screen_size(&self) -> (u32, u32) {
        self.screen
            .as_ref()
            .map(|s| (s.width, s.height))
            .unwrap_or((DEFAULT_SCREEN_WIDTH, DEFAULT_SCREEN_HEIGHT))
    }
}
