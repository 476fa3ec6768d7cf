//! Pointer interaction protocol for anchors.
//!
//! Per anchor: `DragStart` takes the baseline snapshot, each `DragMove` runs
//! the bound recompute function for live feedback, and `DragEnd` turns the
//! baseline/final snapshots into a [`ChangeCommand`] which is executed and
//! handed to the host's undo stack. The final snapshot becomes the baseline
//! of the next drag.

use std::fmt;
use std::rc::Rc;

use annokit_core::{Image, Shared};
use uuid::Uuid;

use crate::anchor::{Anchor, AnchorSnapshot};
use crate::app::EditorApp;
use crate::commands::{ChangeCommand, Command, DrawEventCallback};
use crate::model::Point;
use crate::recompute::RecomputeFn;
use crate::scene::{AnchorId, Scene};

/// Handle returned by a bind, used to unbind exactly that binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingToken(Uuid);

impl BindingToken {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for BindingToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bind({})", &self.0.to_string()[..8])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Press,
    DragStart,
    DragMove,
    DragEnd,
    HoverEnter,
    HoverLeave,
}

impl PointerEventKind {
    pub const ALL: [PointerEventKind; 6] = [
        PointerEventKind::Press,
        PointerEventKind::DragStart,
        PointerEventKind::DragMove,
        PointerEventKind::DragEnd,
        PointerEventKind::HoverEnter,
        PointerEventKind::HoverLeave,
    ];
}

/// Pointer event delivered to an anchor by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press,
    DragStart,
    /// The pointer dragged the anchor to a new position.
    DragMove(Point),
    DragEnd,
    HoverEnter,
    HoverLeave,
}

impl PointerEvent {
    pub fn kind(&self) -> PointerEventKind {
        match self {
            PointerEvent::Press => PointerEventKind::Press,
            PointerEvent::DragStart => PointerEventKind::DragStart,
            PointerEvent::DragMove(_) => PointerEventKind::DragMove,
            PointerEvent::DragEnd => PointerEventKind::DragEnd,
            PointerEvent::HoverEnter => PointerEventKind::HoverEnter,
            PointerEvent::HoverLeave => PointerEventKind::HoverLeave,
        }
    }
}

/// Whether the host should keep propagating an event after the anchor handled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlow {
    Continue,
    Stop,
}

/// The interaction protocol installed on one anchor.
///
/// Display name, recompute function and image are captured when the binding
/// is created; later editor changes need a rebind to be seen.
#[derive(Clone)]
pub struct AnchorBinding {
    token: BindingToken,
    display_name: String,
    update: Option<RecomputeFn>,
    image: Option<Rc<Image>>,
    start: Option<AnchorSnapshot>,
    dragging: bool,
}

impl AnchorBinding {
    pub fn new(
        display_name: impl Into<String>,
        update: Option<RecomputeFn>,
        image: Option<Rc<Image>>,
    ) -> Self {
        Self {
            token: BindingToken::new(),
            display_name: display_name.into(),
            update,
            image,
            start: None,
            dragging: false,
        }
    }

    pub fn token(&self) -> BindingToken {
        self.token
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn update(&self) -> Option<&RecomputeFn> {
        self.update.as_ref()
    }

    pub fn image(&self) -> Option<&Rc<Image>> {
        self.image.as_ref()
    }

    /// Baseline snapshot of the current (or next) drag.
    pub fn start(&self) -> Option<&AnchorSnapshot> {
        self.start.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn listened_events(&self) -> &'static [PointerEventKind] {
        &PointerEventKind::ALL
    }
}

impl fmt::Debug for AnchorBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnchorBinding")
            .field("token", &self.token)
            .field("display_name", &self.display_name)
            .field("has_update", &self.update.is_some())
            .field("has_image", &self.image.is_some())
            .field("start", &self.start)
            .field("dragging", &self.dragging)
            .finish()
    }
}

/// Install the protocol on `anchor`, replacing any previous binding.
pub fn set_anchor_on(
    anchor: &mut Anchor,
    display_name: &str,
    update: Option<RecomputeFn>,
    image: Option<Rc<Image>>,
) -> BindingToken {
    let token = anchor.bind(AnchorBinding::new(display_name, update, image));
    tracing::debug!("Anchor {} bound with {}", anchor.id(), token);
    token
}

/// Remove the protocol from `anchor`. Returns false if it was not bound.
pub fn set_anchor_off(anchor: &mut Anchor) -> bool {
    match anchor.binding().map(AnchorBinding::token) {
        Some(token) => {
            let removed = anchor.unbind(token);
            tracing::debug!("Anchor {} unbound from {}", anchor.id(), token);
            removed
        }
        None => false,
    }
}

/// What a drag end needs to commit an edit.
pub struct DispatchContext<'a> {
    pub app: &'a Shared<dyn EditorApp>,
    pub on_draw: Option<DrawEventCallback>,
}

/// Deliver a pointer event to an anchor.
pub fn dispatch(
    scene: &mut Scene,
    anchor_id: AnchorId,
    event: PointerEvent,
    context: &DispatchContext<'_>,
) -> EventFlow {
    let Some(group_id) = scene.anchor_group(anchor_id) else {
        tracing::debug!("Pointer event for unknown anchor {}", anchor_id);
        return EventFlow::Continue;
    };

    let Some(anchor) = scene.anchor_mut(anchor_id) else {
        return EventFlow::Continue;
    };

    if let PointerEvent::DragMove(position) = event {
        if anchor.is_draggable() {
            anchor.set_position(position);
        }
    }

    if !anchor.is_bound() {
        return EventFlow::Continue;
    }

    match event {
        PointerEvent::Press => {
            if let Some(group) = scene.group_mut(group_id) {
                group.move_anchor_to_top(anchor_id);
            }
            EventFlow::Continue
        }
        PointerEvent::DragStart => {
            let snapshot = anchor.snapshot();
            if let Some(binding) = anchor.binding_mut() {
                binding.start = Some(snapshot);
                binding.dragging = true;
            }
            EventFlow::Stop
        }
        PointerEvent::DragMove(_) => {
            drag_move(scene, anchor_id);
            EventFlow::Stop
        }
        PointerEvent::DragEnd => {
            drag_end(scene, anchor_id, context);
            EventFlow::Stop
        }
        PointerEvent::HoverEnter | PointerEvent::HoverLeave => {
            anchor.set_hovered(event == PointerEvent::HoverEnter);
            draw_anchor_layer(scene, anchor_id);
            EventFlow::Continue
        }
    }
}

fn drag_move(scene: &mut Scene, anchor_id: AnchorId) {
    let Some(anchor) = scene.anchor(anchor_id) else {
        return;
    };
    let snapshot = anchor.snapshot();
    let (update, image) = match anchor.binding() {
        Some(binding) => (binding.update.clone(), binding.image.clone()),
        None => (None, None),
    };

    match (update, scene.group_mut(snapshot.group)) {
        (Some(update), Some(group)) => update(group, &snapshot, image.as_deref()),
        (None, _) => tracing::warn!("No update function!"),
        (Some(_), None) => tracing::warn!("Dragged anchor {} has no group", anchor_id),
    }

    draw_anchor_layer(scene, anchor_id);
}

fn drag_end(scene: &mut Scene, anchor_id: AnchorId, context: &DispatchContext<'_>) {
    let Some(anchor) = scene.anchor_mut(anchor_id) else {
        return;
    };
    let end = anchor.snapshot();
    let Some(binding) = anchor.binding_mut() else {
        return;
    };

    if !binding.dragging {
        tracing::warn!("Drag end on anchor {} with no drag in progress", anchor_id);
    }
    binding.dragging = false;
    let start = binding.start.take().unwrap_or_else(|| end.clone());

    let display_name = binding.display_name.clone();
    let update = binding.update.clone();
    let image = binding.image.clone();
    let layer = scene.group(end.group).and_then(|group| group.layer());

    let mut command = ChangeCommand::new(&display_name, update, start, end.clone(), layer, image);
    command.on_execute = context.on_draw.clone();
    command.on_undo = context.on_draw.clone();

    command.execute(scene);
    context.app.borrow_mut().add_to_undo_stack(command);

    // Recompute may have replaced the anchor; look it up again.
    if let Some(binding) = scene.anchor_mut(anchor_id).and_then(Anchor::binding_mut) {
        binding.start = Some(end);
    }
}

fn draw_anchor_layer(scene: &mut Scene, anchor_id: AnchorId) {
    let layer = scene
        .anchor_group(anchor_id)
        .and_then(|group| scene.group(group))
        .and_then(|group| group.layer());
    match layer {
        Some(layer) => {
            scene.draw(layer);
        }
        None => tracing::warn!("No layer to draw the anchor!"),
    }
}
