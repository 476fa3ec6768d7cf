//! # AnnoKit Core
//!
//! Core types shared by the AnnoKit crates: the image model used to
//! calibrate measurements, the application event bus and the error types.

pub mod data;
pub mod error;
pub mod event_bus;
pub mod types;

pub use data::{Image, ImageSize, Spacing};

pub use error::{Error, ImageError, Result};

// Re-export event bus for convenience
pub use event_bus::{
    AppEvent, CommandPhase, Delivery, DrawEvent, DrawEventKind, EventBus, EventBusConfig,
    EventBusError, EventCategory, EventFilter, JournalEntry, SubscriptionId, ViewEvent,
};

pub use types::{shared, Shared, ThreadSafeRwMap};
