//! # AnnoKit Editor
//!
//! Interactive editing of annotation shapes through draggable anchors.
//!
//! ## Architecture
//!
//! ```text
//! ShapeEditor (public API)
//!   ├── ShapeAnchorLayout (anchor positions and roles per shape variant)
//!   ├── AnchorFactory (anchor creation, styled for the view scale)
//!   ├── binding (press / drag / hover protocol per anchor)
//!   └── ChangeCommand (undoable result of one drag)
//! ```
//!
//! Geometry recompute functions are supplied by the host through a
//! [`RecomputeRegistry`]; the editor never computes shape geometry itself.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let host = shared(EditorHost::default());
//! let mut editor = ShapeEditor::new(host.clone(), registry);
//! editor.set_shape(&mut scene, Some(group));
//! editor.enable(&mut scene);
//!
//! let anchor = scene.group(group).unwrap().anchors()[0].id();
//! editor.handle_pointer_event(&mut scene, anchor, PointerEvent::DragStart);
//! editor.handle_pointer_event(&mut scene, anchor, PointerEvent::DragMove(Point::new(5.0, 5.0)));
//! editor.handle_pointer_event(&mut scene, anchor, PointerEvent::DragEnd);
//!
//! host.borrow_mut().undo(&mut scene);
//! ```

pub mod anchor;
pub mod app;
pub mod binding;
pub mod commands;
pub mod editor;
pub mod error;
pub mod history;
pub mod layout;
pub mod model;
pub mod recompute;
pub mod scene;

pub use anchor::{Anchor, AnchorFactory, AnchorRole, AnchorSnapshot, AnchorStyle};
pub use app::{EditorApp, EditorHost, Style};
pub use binding::{
    set_anchor_off, set_anchor_on, AnchorBinding, BindingToken, EventFlow, PointerEvent,
    PointerEventKind,
};
pub use commands::{ChangeCommand, Command, DrawEventCallback};
pub use editor::ShapeEditor;
pub use error::{SceneError, SceneResult};
pub use history::UndoStack;
pub use layout::{AnchorSpec, ShapeAnchorLayout};
pub use model::{EllipseShape, Label, LineKind, LineShape, OtherShape, Point, RectShape, Shape};
pub use recompute::{RecomputeFn, RecomputeRegistry, UpdateKind};
pub use scene::{AnchorId, Group, GroupId, Layer, LayerId, Scene};
