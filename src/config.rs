//! Texture configuration
//!
//! A [`TextureConfig`] is the fully resolved input of the generator. It can be
//! built in code with the `with_*` methods or loaded from a TOML file; any key
//! missing from the file keeps its default value.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default page width in millimeters (A4)
pub const DEFAULT_WIDTH: f64 = 210.0;
/// Default page height in millimeters (A4)
pub const DEFAULT_HEIGHT: f64 = 297.0;
/// Default marker density in markers per square meter
pub const DEFAULT_DENSITY: f64 = 10_000.0;
/// Default minimum marker width in millimeters
pub const DEFAULT_MINIMUM_SIZE: f64 = 2.0;
/// Default background gray level
pub const DEFAULT_BACKGROUND_LIGHTNESS: u8 = 127;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Resolved generator configuration
///
/// Values are taken as given. Non-positive or otherwise odd numbers flow
/// straight into the geometry and may produce an empty or degenerate texture.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureConfig {
    /// Page width in millimeters
    pub width: f64,
    /// Page height in millimeters
    pub height: f64,
    /// Marker density in markers per square meter
    pub density: f64,
    /// Edge of the smallest marker in millimeters
    pub minimum_size: f64,
    /// Gray level of the page background
    pub background_lightness: u8,
}

/// TOML structure for deserializing configuration files
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    page: Option<TomlPage>,
    markers: Option<TomlMarkers>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlPage {
    width: Option<f64>,
    height: Option<f64>,
    background_lightness: Option<u8>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlMarkers {
    density: Option<f64>,
    minimum_size: Option<f64>,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            density: DEFAULT_DENSITY,
            minimum_size: DEFAULT_MINIMUM_SIZE,
            background_lightness: DEFAULT_BACKGROUND_LIGHTNESS,
        }
    }
}

impl TextureConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(page) = parsed.page {
            if let Some(width) = page.width {
                config.width = width;
            }
            if let Some(height) = page.height {
                config.height = height;
            }
            if let Some(lightness) = page.background_lightness {
                config.background_lightness = lightness;
            }
        }

        if let Some(markers) = parsed.markers {
            if let Some(density) = markers.density {
                config.density = density;
            }
            if let Some(size) = markers.minimum_size {
                config.minimum_size = size;
            }
        }

        Ok(config)
    }

    /// Set the page size in millimeters
    pub fn with_page_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the page width in millimeters
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set the page height in millimeters
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Set the marker density (markers per square meter)
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Set the minimum marker size in millimeters
    pub fn with_minimum_size(mut self, size: f64) -> Self {
        self.minimum_size = size;
        self
    }

    /// Set the background gray level
    pub fn with_background_lightness(mut self, lightness: u8) -> Self {
        self.background_lightness = lightness;
        self
    }
}
