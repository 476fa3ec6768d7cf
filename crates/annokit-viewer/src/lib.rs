//! # AnnoKit Viewer
//!
//! View state of the annotated image (current index along each dimension,
//! zoom) and the mouse wheel handler that scrolls through slices or frames.

pub mod scroll_wheel;
pub mod view_controller;

pub use scroll_wheel::{DeltaMode, ScrollStep, ScrollWheel, WheelEvent};
pub use view_controller::{ViewController, FRAME_DIMENSION, SLICE_DIMENSION};
