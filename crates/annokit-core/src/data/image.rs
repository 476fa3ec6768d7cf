//! Image geometry: size, spacing and calibrated lengths.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ImageError;

/// Physical size of one pixel along each dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spacing {
    values: Vec<f64>,
}

impl Spacing {
    /// Create a spacing from per-dimension values.
    ///
    /// Every value must be finite and non-zero.
    pub fn new(values: Vec<f64>) -> Result<Self, ImageError> {
        if values.is_empty() {
            return Err(ImageError::EmptySpacing);
        }
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v == 0.0)
        {
            return Err(ImageError::InvalidSpacingValue { index, value });
        }
        Ok(Self { values })
    }

    /// Spacing value along `dimension`, if present.
    pub fn get(&self, dimension: usize) -> Option<f64> {
        self.values.get(dimension).copied()
    }

    /// Number of dimensions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: an empty spacing cannot be built.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Check for equality with another spacing.
    ///
    /// Spacings of different lengths are never equal.
    pub fn equals(&self, other: &Spacing) -> bool {
        self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(a, b)| a == b)
    }
}

impl PartialEq for Spacing {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "({})", parts.join(", "))
    }
}

/// Number of values along each image dimension.
///
/// Dimension 0 and 1 are the in-plane axes, 2 is the slice axis and 3 is
/// the frame (time) axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    values: Vec<usize>,
}

impl ImageSize {
    pub fn new(values: Vec<usize>) -> Result<Self, ImageError> {
        if values.is_empty() {
            return Err(ImageError::EmptySize);
        }
        if let Some(dimension) = values.iter().position(|v| *v == 0) {
            return Err(ImageError::ZeroSize { dimension });
        }
        Ok(Self { values })
    }

    /// Number of values along `dimension`; missing dimensions count as 1.
    pub fn get(&self, dimension: usize) -> usize {
        self.values.get(dimension).copied().unwrap_or(1)
    }

    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    /// Whether `dimension` holds more than one value.
    pub fn more_than_one(&self, dimension: usize) -> bool {
        self.get(dimension) > 1
    }

    /// Whether the image can be scrolled through slices.
    pub fn can_scroll_3d(&self) -> bool {
        self.more_than_one(2)
    }

    /// Total number of values.
    pub fn total(&self) -> usize {
        self.values.iter().product()
    }
}

/// Image geometry used to turn pixel distances into physical quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    size: ImageSize,
    spacing: Spacing,
    /// Physical unit of the spacing values, e.g. "mm".
    unit: String,
}

impl Image {
    pub fn new(size: ImageSize, spacing: Spacing) -> Result<Self, ImageError> {
        // 2D spacing may describe a 3D or 4D size.
        if spacing.len() < 2 || spacing.len() > size.dimensions().max(2) {
            return Err(ImageError::DimensionMismatch {
                spacing: spacing.len(),
                size: size.dimensions(),
            });
        }
        Ok(Self {
            size,
            spacing,
            unit: "mm".to_string(),
        })
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn size(&self) -> &ImageSize {
        &self.size
    }

    pub fn spacing(&self) -> &Spacing {
        &self.spacing
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Physical length of an in-plane pixel displacement.
    pub fn physical_length(&self, dx: f64, dy: f64) -> f64 {
        let sx = self.spacing.get(0).unwrap_or(1.0);
        let sy = self.spacing.get(1).unwrap_or(1.0);
        (dx * sx).hypot(dy * sy)
    }

    /// Physical area of an in-plane pixel area.
    pub fn physical_area(&self, width: f64, height: f64) -> f64 {
        let sx = self.spacing.get(0).unwrap_or(1.0);
        let sy = self.spacing.get(1).unwrap_or(1.0);
        (width * sx * height * sy).abs()
    }
}
