//! # Event Bus Module
//!
//! Publish/subscribe distribution of drawing and view events between the
//! editor, the viewer and whatever the host wires to them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use annokit_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Draw]),
//!     |event| println!("{}", event.description()),
//! );
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
