//! Error handling for AnnoKit
//!
//! Provides error types for the core layer:
//! - Image errors (spacing and size validation)
//! - I/O errors
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Image error type
///
/// Represents errors raised while building or querying the image model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImageError {
    /// Spacing was created without any values
    #[error("Cannot create spacing with empty values.")]
    EmptySpacing,

    /// A spacing value is zero or not a finite number
    #[error("Cannot create spacing with non number or zero values.")]
    InvalidSpacingValue {
        /// The index of the offending value.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Size was created without any dimensions
    #[error("Cannot create size with empty values.")]
    EmptySize,

    /// A size value is zero
    #[error("Cannot create size with zero value at dimension {dimension}.")]
    ZeroSize {
        /// The dimension holding the zero value.
        dimension: usize,
    },

    /// Requested dimension does not exist
    #[error("Dimension {dimension} out of range (image has {count} dimensions)")]
    DimensionOutOfRange {
        /// The requested dimension.
        dimension: usize,
        /// The number of available dimensions.
        count: usize,
    },

    /// Spacing and size do not describe the same number of dimensions
    #[error("Spacing has {spacing} values but size has {size} dimensions")]
    DimensionMismatch {
        /// Number of spacing values.
        spacing: usize,
        /// Number of size dimensions.
        size: usize,
    },
}

/// Main error type for AnnoKit core
#[derive(Error, Debug)]
pub enum Error {
    /// Image error
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an image error
    pub fn is_image_error(&self) -> bool {
        matches!(self, Error::Image(_))
    }
}

/// Result type alias for AnnoKit core operations
pub type Result<T> = std::result::Result<T, Error>;
