//! Application configuration
//!
//! Every section has defaults, so a partial file only overrides what it names.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Drawing style shared by all annotations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    /// Base stroke width in screen pixels
    pub stroke_width: f64,
    /// Display scale factor applied to style sizes
    pub scale: f64,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            scale: 1.0,
        }
    }
}

/// Anchor (handle) appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorSettings {
    /// Radius before style and view scaling
    pub base_radius: f64,
    /// Stroke colour at rest
    pub stroke: String,
    /// Stroke colour while hovered
    pub hover_stroke: String,
    /// Fill colour
    pub fill: String,
}

impl Default for AnchorSettings {
    fn default() -> Self {
        Self {
            base_radius: 6.0,
            stroke: "#999".to_string(),
            hover_stroke: "#ddd".to_string(),
            fill: "rgba(100,100,100,0.7)".to_string(),
        }
    }
}

/// Mouse wheel navigation thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelSettings {
    /// Accumulated delta needed for one step when deltas are in pixels
    pub pixel_threshold: f64,
    /// Accumulated delta needed for one step when deltas are in lines
    pub line_threshold: f64,
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self {
            pixel_threshold: 52.0,
            line_threshold: 5.99,
        }
    }
}

/// Undo history settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of undoable edits kept
    pub max_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { max_depth: 50 }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default `tracing` filter directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Annotation style
    pub style: StyleSettings,
    /// Anchor appearance
    pub anchor: AnchorSettings,
    /// Wheel navigation
    pub wheel: WheelSettings,
    /// Undo history
    pub history: HistorySettings,
    /// Logging
    pub logging: LoggingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the configuration file
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("annokit").join("config.toml"))
            .ok_or(SettingsError::NoConfigDirectory)
    }

    /// Load config from file, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = extension(path)?;
        let content =
            std::fs::read_to_string(path).map_err(|err| SettingsError::io(path, err))?;

        let config: Self = match format {
            Format::Json => {
                serde_json::from_str(&content).map_err(|err| SettingsError::parse(path, err))?
            }
            Format::Toml => {
                toml::from_str(&content).map_err(|err| SettingsError::parse(path, err))?
            }
        };

        config.validate()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path)? {
            Format::Json => serde_json::to_string_pretty(self)
                .map_err(|err| SettingsError::Serialize(err.to_string()))?,
            Format::Toml => toml::to_string_pretty(self)
                .map_err(|err| SettingsError::Serialize(err.to_string()))?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|err| SettingsError::io(parent, err))?;
        }
        std::fs::write(path, content).map_err(|err| SettingsError::io(path, err))?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("style.stroke_width", self.style.stroke_width)?;
        positive("style.scale", self.style.scale)?;
        positive("anchor.base_radius", self.anchor.base_radius)?;
        positive("wheel.pixel_threshold", self.wheel.pixel_threshold)?;
        positive("wheel.line_threshold", self.wheel.line_threshold)?;

        if self.history.max_depth == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "history.max_depth".to_string(),
                value: "0".to_string(),
            });
        }

        for (key, colour) in [
            ("anchor.stroke", &self.anchor.stroke),
            ("anchor.hover_stroke", &self.anchor.hover_stroke),
            ("anchor.fill", &self.anchor.fill),
        ] {
            if colour.trim().is_empty() {
                return Err(ConfigError::EmptyColour(key.to_string()));
            }
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

fn extension(path: &Path) -> Result<Format, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn positive(key: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}
