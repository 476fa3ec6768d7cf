//! Editing session: one image, one drawing layer, one shape editor.
//!
//! The session owns the scene and plays the host role for the editor. Draw
//! events from committed, undone and redone changes and index changes from
//! wheel navigation are published on the event bus.

use std::rc::Rc;
use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;

use annokit_core::{shared, AppEvent, DrawEvent, EventBus, Image, Shared, ViewEvent};
use annokit_editor::{
    AnchorId, AnchorRole, DrawEventCallback, EditorApp, EditorHost, GroupId, LayerId, Point,
    PointerEvent, Scene, Shape, ShapeEditor,
};
use annokit_settings::Config;
use annokit_viewer::{ScrollStep, ScrollWheel, ViewController, WheelEvent};

use crate::measurements::default_registry;

/// Serializable view of one annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotationSummary {
    pub id: GroupId,
    pub name: String,
    pub shape: Shape,
    pub label: Option<String>,
}

pub struct Session {
    bus: Arc<EventBus>,
    scene: Scene,
    layer: LayerId,
    host: Shared<EditorHost>,
    editor: ShapeEditor,
    view: ViewController,
    wheel: ScrollWheel,
}

impl Session {
    pub fn new(config: &Config, image: Image) -> Self {
        Self::with_bus(config, image, Arc::new(EventBus::new()))
    }

    pub fn with_bus(config: &Config, image: Image, bus: Arc<EventBus>) -> Self {
        let mut scene = Scene::new();
        let layer = scene.add_layer("draw");
        let view = ViewController::new(image.size().clone());

        let host = shared(EditorHost::new(config));
        let app: Shared<dyn EditorApp> = host.clone();
        let mut editor =
            ShapeEditor::with_anchor_settings(app, default_registry(), config.anchor.clone());
        editor.set_image(Some(Rc::new(image)));

        let publisher = bus.clone();
        let callback: DrawEventCallback = Rc::new(move |event: &DrawEvent| {
            publish(&publisher, AppEvent::Draw(event.clone()));
        });
        editor.set_draw_event_callback(Some(callback));

        Self {
            bus,
            scene,
            layer,
            host,
            editor,
            view,
            wheel: ScrollWheel::new(config.wheel.clone()),
        }
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn editor(&self) -> &ShapeEditor {
        &self.editor
    }

    pub fn view(&self) -> &ViewController {
        &self.view
    }

    pub fn host(&self) -> &Shared<EditorHost> {
        &self.host
    }

    /// Add an annotation to the drawing layer.
    pub fn add_annotation(&mut self, shape: impl Into<Shape>) -> anyhow::Result<GroupId> {
        let id = self.scene.add_group(Some(self.layer), shape)?;
        tracing::debug!("Added annotation {}", id);
        Ok(id)
    }

    /// Start editing `group`, or stop editing with `None`.
    pub fn select(&mut self, group: Option<GroupId>) {
        self.editor.set_shape(&mut self.scene, group);
        if group.is_some() {
            self.editor.enable(&mut self.scene);
        } else {
            self.editor.disable(&mut self.scene);
        }
    }

    /// Anchor of the edited annotation with the given role.
    pub fn anchor(&self, role: &AnchorRole) -> Option<AnchorId> {
        let group = self.editor.shape()?;
        self.scene
            .group(group)?
            .anchor_by_role(role)
            .map(|anchor| anchor.id())
    }

    pub fn pointer(&mut self, anchor: AnchorId, event: PointerEvent) {
        self.editor
            .handle_pointer_event(&mut self.scene, anchor, event);
    }

    /// Press and drag the anchor with `role` through `moves`, then release.
    pub fn drag(&mut self, role: &AnchorRole, moves: &[Point]) -> anyhow::Result<()> {
        let anchor = self
            .anchor(role)
            .with_context(|| format!("No {} anchor on the edited annotation", role))?;
        self.pointer(anchor, PointerEvent::Press);
        self.pointer(anchor, PointerEvent::DragStart);
        for position in moves {
            self.pointer(anchor, PointerEvent::DragMove(*position));
        }
        self.pointer(anchor, PointerEvent::DragEnd);
        Ok(())
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.host.borrow_mut().undo(&mut self.scene);
        if undone {
            self.refresh_anchors();
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.host.borrow_mut().redo(&mut self.scene);
        if redone {
            self.refresh_anchors();
        }
        redone
    }

    /// Feed a wheel event to slice/frame navigation.
    pub fn wheel(&mut self, event: &WheelEvent) -> Option<ScrollStep> {
        let step = self.wheel.wheel(event, &mut self.view)?;
        if let Some(change) = &step.change {
            self.publish_view(change.clone());
        }
        Some(step)
    }

    pub fn zoom_in(&mut self) {
        self.view.zoom_in();
        self.apply_zoom();
    }

    pub fn zoom_out(&mut self) {
        self.view.zoom_out();
        self.apply_zoom();
    }

    pub fn reset_zoom(&mut self) {
        self.view.reset_zoom();
        self.apply_zoom();
    }

    pub fn summaries(&self) -> Vec<AnnotationSummary> {
        self.scene
            .groups()
            .map(|group| AnnotationSummary {
                id: group.id(),
                name: group.name(),
                shape: group.shape().clone(),
                label: group.label().map(|label| label.text.clone()),
            })
            .collect()
    }

    fn apply_zoom(&mut self) {
        self.host.borrow_mut().set_scale(self.view.zoom_scale());
        self.refresh_anchors();
    }

    /// Anchors are sized and placed at creation; rebuild them for the
    /// current scale and geometry.
    fn refresh_anchors(&mut self) {
        if self.editor.is_active() && self.editor.shape().is_some() {
            self.editor.reset_anchors(&mut self.scene);
        }
    }

    fn publish_view(&self, event: ViewEvent) {
        publish(&self.bus, AppEvent::View(event));
    }
}

fn publish(bus: &EventBus, event: AppEvent) {
    if let Err(err) = bus.publish(event) {
        tracing::trace!("Event dropped: {}", err);
    }
}
