//! Host application seam: view scale, drawing style and the undo stack.

use annokit_settings::{Config, StyleSettings};

use crate::commands::{ChangeCommand, Command};
use crate::history::UndoStack;
use crate::scene::Scene;

/// Drawing style shared by all annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    stroke_width: f64,
    scale: f64,
}

impl Style {
    pub fn new(stroke_width: f64, scale: f64) -> Self {
        Self {
            stroke_width,
            scale,
        }
    }

    pub fn from_settings(settings: &StyleSettings) -> Self {
        Self::new(settings.stroke_width, settings.scale)
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Stroke width multiplied by the display scale.
    pub fn scaled_stroke_width(&self) -> f64 {
        self.stroke_width * self.scale
    }

    /// Scale a size by the display scale.
    pub fn scale(&self, value: f64) -> f64 {
        value * self.scale
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::from_settings(&StyleSettings::default())
    }
}

/// What the editor needs from the application hosting it.
pub trait EditorApp {
    /// Current view zoom.
    fn scale(&self) -> f64;

    fn style(&self) -> &Style;

    /// Receive a change that has already been executed.
    fn add_to_undo_stack(&mut self, command: ChangeCommand);
}

/// Ready-made host keeping committed edits in an [`UndoStack`].
#[derive(Debug)]
pub struct EditorHost {
    scale: f64,
    style: Style,
    history: UndoStack,
}

impl EditorHost {
    pub fn new(config: &Config) -> Self {
        Self {
            scale: 1.0,
            style: Style::from_settings(&config.style),
            history: UndoStack::with_depth(config.history.max_depth),
        }
    }

    /// Update the view zoom. Non-positive values are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() && scale > 0.0 {
            self.scale = scale;
        } else {
            tracing::warn!("Ignoring invalid view scale {}", scale);
        }
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut UndoStack {
        &mut self.history
    }

    pub fn undo(&mut self, scene: &mut Scene) -> bool {
        self.history.undo(scene)
    }

    pub fn redo(&mut self, scene: &mut Scene) -> bool {
        self.history.redo(scene)
    }
}

impl Default for EditorHost {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl EditorApp for EditorHost {
    fn scale(&self) -> f64 {
        self.scale
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn add_to_undo_stack(&mut self, command: ChangeCommand) {
        tracing::debug!("Recording {}", command.name());
        self.history.record(command);
    }
}
