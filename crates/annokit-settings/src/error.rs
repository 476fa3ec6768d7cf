//! Error types for the settings crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    /// The platform has no per-user configuration directory.
    #[error("No configuration directory on this platform")]
    NoConfigDirectory,

    #[error("Cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but its content is not a valid configuration.
    #[error("Cannot parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Cannot serialize configuration: {0}")]
    Serialize(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl SettingsError {
    pub(crate) fn io(path: &std::path::Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(path: &std::path::Path, message: impl ToString) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }
}

/// Configuration values rejected by validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Only `.json` and `.toml` files are understood.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("Value out of range for '{key}': {value}")]
    ValueOutOfRange { key: String, value: String },

    #[error("Empty colour for '{0}'")]
    EmptyColour(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

pub type ConfigResult<T> = Result<T, ConfigError>;
