//! # AnnoKit
//!
//! Interactive editing of measurement annotations (rulers, protractors,
//! arrows, regions, rectangles, ellipses) drawn over medical and scientific
//! images.
//!
//! ## Architecture
//!
//! AnnoKit is organized as a workspace with multiple crates:
//!
//! 1. **annokit-core** - Image geometry, shared aliases, event bus
//! 2. **annokit-settings** - Configuration file handling
//! 3. **annokit-editor** - Scene model, anchors, shape editor, undoable changes
//! 4. **annokit-viewer** - Slice/frame navigation, zoom, mouse wheel input
//! 5. **annokit** - Measurement recompute functions, session wiring and demo binary

pub mod measurements;
pub mod session;

pub use annokit_core::{
    shared, AppEvent, CommandPhase, DrawEvent, EventBus, EventFilter, Image, ImageSize, Shared,
    Spacing, ViewEvent,
};
pub use annokit_editor::{
    AnchorRole, EditorHost, EllipseShape, GroupId, LineKind, LineShape, Point, PointerEvent,
    RectShape, Scene, Shape, ShapeEditor,
};
pub use annokit_settings::Config;
pub use annokit_viewer::{ScrollWheel, ViewController, WheelEvent};

pub use measurements::default_registry;
pub use session::{AnnotationSummary, Session};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date/time set by build.rs
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with tracing
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init_logging(default_filter: &str) -> anyhow::Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!("AnnoKit {} (built {})", VERSION, BUILD_DATE);
    Ok(())
}
