//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so they can be logged or replayed.

use serde::{Deserialize, Serialize};

/// Root event enum for all application events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Annotation drawing events
    Draw(DrawEvent),
    /// View navigation events
    View(ViewEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Draw(_) => EventCategory::Draw,
            AppEvent::View(_) => EventCategory::View,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Draw(e) => e.description(),
            AppEvent::View(e) => e.description(),
        }
    }
}

impl From<DrawEvent> for AppEvent {
    fn from(event: DrawEvent) -> Self {
        AppEvent::Draw(event)
    }
}

impl From<ViewEvent> for AppEvent {
    fn from(event: ViewEvent) -> Self {
        AppEvent::View(event)
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Annotation drawing events.
    Draw,
    /// View navigation events.
    View,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Draw => write!(f, "Draw"),
            EventCategory::View => write!(f, "View"),
        }
    }
}

/// Kind of drawing event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawEventKind {
    /// An existing annotation changed geometry.
    Change,
}

impl DrawEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawEventKind::Change => "drawchange",
        }
    }
}

/// Whether a command was applied or reverted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandPhase {
    /// The command was executed (or redone).
    Executed,
    /// The command was undone.
    Undone,
}

/// Notification emitted when an edit command is applied or undone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawEvent {
    /// Kind of drawing change.
    pub kind: DrawEventKind,
    /// Identifier of the annotation group that changed.
    pub group_id: u64,
    /// Name of the command that produced the change.
    pub command: String,
    /// Whether the change was applied or reverted.
    pub phase: CommandPhase,
}

impl DrawEvent {
    /// Create a change event.
    pub fn change(group_id: u64, command: impl Into<String>, phase: CommandPhase) -> Self {
        Self {
            kind: DrawEventKind::Change,
            group_id,
            command: command.into(),
            phase,
        }
    }

    fn description(&self) -> String {
        let phase = match self.phase {
            CommandPhase::Executed => "applied",
            CommandPhase::Undone => "undone",
        };
        format!(
            "{} on group {}: {} {}",
            self.kind.as_str(),
            self.group_id,
            self.command,
            phase
        )
    }
}

/// View navigation events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewEvent {
    /// An index along a dimension changed.
    IndexChanged {
        /// The dimension that changed.
        dimension: usize,
        /// The new index along that dimension.
        value: usize,
    },
}

impl ViewEvent {
    fn description(&self) -> String {
        match self {
            ViewEvent::IndexChanged { dimension, value } => {
                format!("Index of dimension {} set to {}", dimension, value)
            }
        }
    }
}
