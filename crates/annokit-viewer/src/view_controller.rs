use serde::{Deserialize, Serialize};

use annokit_core::{ImageSize, ViewEvent};

/// Dimension scrolled by 3-D navigation.
pub const SLICE_DIMENSION: usize = 2;
/// Time dimension of multi-frame images.
pub const FRAME_DIMENSION: usize = 3;

const ZOOM_STEP: f64 = 1.1;
const MIN_ZOOM: f64 = 0.1;
const MAX_ZOOM: f64 = 50.0;

/// Current position in an image and zoom of the view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewController {
    size: ImageSize,
    index: Vec<usize>,
    zoom_scale: f64,
}

impl ViewController {
    pub fn new(size: ImageSize) -> Self {
        let index = vec![0; size.dimensions()];
        Self {
            size,
            index,
            zoom_scale: 1.0,
        }
    }

    pub fn image_size(&self) -> &ImageSize {
        &self.size
    }

    /// Index along `dimension`; missing dimensions are at 0.
    pub fn current_index(&self, dimension: usize) -> usize {
        self.index.get(dimension).copied().unwrap_or(0)
    }

    /// Set the index along `dimension`, returning the change event if it moved.
    pub fn set_index(&mut self, dimension: usize, value: usize) -> Option<ViewEvent> {
        if value >= self.size.get(dimension) || dimension >= self.index.len() {
            tracing::debug!("Index {} out of range for dimension {}", value, dimension);
            return None;
        }
        if self.index[dimension] == value {
            return None;
        }
        self.index[dimension] = value;
        Some(ViewEvent::IndexChanged { dimension, value })
    }

    pub fn increment_index(&mut self, dimension: usize) -> Option<ViewEvent> {
        let next = self.current_index(dimension) + 1;
        self.set_index(dimension, next)
    }

    pub fn decrement_index(&mut self, dimension: usize) -> Option<ViewEvent> {
        let current = self.current_index(dimension);
        if current == 0 {
            return None;
        }
        self.set_index(dimension, current - 1)
    }

    pub fn increment_scroll_index(&mut self) -> Option<ViewEvent> {
        self.increment_index(SLICE_DIMENSION)
    }

    pub fn decrement_scroll_index(&mut self) -> Option<ViewEvent> {
        self.decrement_index(SLICE_DIMENSION)
    }

    pub fn zoom_scale(&self) -> f64 {
        self.zoom_scale
    }

    /// Increase zoom by 10%
    pub fn zoom_in(&mut self) {
        self.zoom_scale = (self.zoom_scale * ZOOM_STEP).min(MAX_ZOOM);
    }

    /// Decrease zoom by 10%
    pub fn zoom_out(&mut self) {
        self.zoom_scale = (self.zoom_scale / ZOOM_STEP).max(MIN_ZOOM);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom_scale = 1.0;
    }
}
