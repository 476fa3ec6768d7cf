//! AnnoKit Settings Crate
//!
//! Handles application configuration: anchor styling, wheel navigation
//! thresholds, undo history depth and logging.

pub mod config;
pub mod error;

pub use config::{
    AnchorSettings, Config, HistorySettings, LoggingSettings, StyleSettings, WheelSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
