//! Data models for the annotated image
//!
//! This module provides:
//! - Pixel spacing with validation
//! - Image size per dimension
//! - The image geometry used to calibrate measurements

pub mod image;

pub use image::{Image, ImageSize, Spacing};
