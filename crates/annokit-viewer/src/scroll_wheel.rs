//! Mouse wheel navigation through slices and frames.
//!
//! Wheel deltas are accumulated until they reach a threshold; each crossing
//! resets the accumulator and takes exactly one step.

use annokit_core::ViewEvent;
use annokit_settings::WheelSettings;

use crate::view_controller::{ViewController, FRAME_DIMENSION, SLICE_DIMENSION};

/// Unit of a wheel delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub delta_y: f64,
    pub delta_mode: DeltaMode,
}

impl WheelEvent {
    pub fn pixels(delta_y: f64) -> Self {
        Self {
            delta_y,
            delta_mode: DeltaMode::Pixel,
        }
    }

    pub fn lines(delta_y: f64) -> Self {
        Self {
            delta_y,
            delta_mode: DeltaMode::Line,
        }
    }
}

/// One navigation step taken by the wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollStep {
    pub dimension: usize,
    /// Wheel moved up (towards higher indices).
    pub forward: bool,
    /// Index change, or `None` when already at the bound.
    pub change: Option<ViewEvent>,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollWheel {
    settings: WheelSettings,
    wheel_delta_y: f64,
}

impl ScrollWheel {
    pub fn new(settings: WheelSettings) -> Self {
        Self {
            settings,
            wheel_delta_y: 0.0,
        }
    }

    /// Delta accumulated since the last step.
    pub fn accumulated(&self) -> f64 {
        self.wheel_delta_y
    }

    fn threshold(&self, mode: DeltaMode) -> f64 {
        match mode {
            DeltaMode::Line => self.settings.line_threshold,
            DeltaMode::Pixel | DeltaMode::Page => self.settings.pixel_threshold,
        }
    }

    /// Handle a wheel event; returns the step taken, if any.
    ///
    /// Scrolls slices when the image can scroll in 3-D, otherwise frames when
    /// there is more than one.
    pub fn wheel(&mut self, event: &WheelEvent, view: &mut ViewController) -> Option<ScrollStep> {
        self.wheel_delta_y += event.delta_y;
        if self.wheel_delta_y.abs() < self.threshold(event.delta_mode) {
            return None;
        }
        self.wheel_delta_y = 0.0;

        let forward = event.delta_y < 0.0;
        let size = view.image_size();
        let dimension = if size.can_scroll_3d() {
            SLICE_DIMENSION
        } else if size.more_than_one(FRAME_DIMENSION) {
            FRAME_DIMENSION
        } else {
            tracing::trace!("Wheel step ignored: nothing to scroll");
            return None;
        };

        let change = match (dimension, forward) {
            (SLICE_DIMENSION, true) => view.increment_scroll_index(),
            (SLICE_DIMENSION, false) => view.decrement_scroll_index(),
            (_, true) => view.increment_index(dimension),
            (_, false) => view.decrement_index(dimension),
        };
        Some(ScrollStep {
            dimension,
            forward,
            change,
        })
    }

    pub fn reset(&mut self) {
        self.wheel_delta_y = 0.0;
    }
}
