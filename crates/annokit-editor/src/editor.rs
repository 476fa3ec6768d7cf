//! Shape editor: attaches anchors to one shape at a time and wires them to
//! live recompute and undoable changes.

use std::fmt;
use std::rc::Rc;

use annokit_core::{Image, Shared};
use annokit_settings::AnchorSettings;

use crate::anchor::AnchorFactory;
use crate::app::EditorApp;
use crate::binding::{self, DispatchContext, EventFlow, PointerEvent};
use crate::commands::DrawEventCallback;
use crate::layout::ShapeAnchorLayout;
use crate::recompute::{RecomputeFn, RecomputeRegistry};
use crate::scene::{AnchorId, Group, GroupId, Scene};

pub struct ShapeEditor {
    app: Shared<dyn EditorApp>,
    registry: RecomputeRegistry,
    factory: AnchorFactory,
    shape: Option<GroupId>,
    image: Option<Rc<Image>>,
    is_active: bool,
    update_function: Option<RecomputeFn>,
    draw_event_callback: Option<DrawEventCallback>,
}

impl ShapeEditor {
    pub fn new(app: Shared<dyn EditorApp>, registry: RecomputeRegistry) -> Self {
        Self::with_anchor_settings(app, registry, AnchorSettings::default())
    }

    pub fn with_anchor_settings(
        app: Shared<dyn EditorApp>,
        registry: RecomputeRegistry,
        settings: AnchorSettings,
    ) -> Self {
        Self {
            app,
            registry,
            factory: AnchorFactory::new(settings),
            shape: None,
            image: None,
            is_active: false,
            update_function: None,
            draw_event_callback: None,
        }
    }

    /// Edit `shape` (or nothing). Anchors of the previous shape are removed and
    /// fresh, hidden anchors are created for the new one.
    pub fn set_shape(&mut self, scene: &mut Scene, shape: Option<GroupId>) {
        self.remove_anchors(scene);
        self.shape = shape;
        if self.shape.is_some() {
            self.remove_anchors(scene);
            self.add_anchors(scene);
        }
    }

    /// Image used by recompute functions. Anchors bound earlier keep the image
    /// they were bound with.
    pub fn set_image(&mut self, image: Option<Rc<Image>>) {
        self.image = image;
    }

    pub fn shape(&self) -> Option<GroupId> {
        self.shape
    }

    pub fn image(&self) -> Option<&Rc<Image>> {
        self.image.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Recompute function selected for the current shape.
    pub fn update_function(&self) -> Option<&RecomputeFn> {
        self.update_function.as_ref()
    }

    pub fn set_draw_event_callback(&mut self, callback: Option<DrawEventCallback>) {
        self.draw_event_callback = callback;
    }

    pub fn enable(&mut self, scene: &mut Scene) {
        self.is_active = true;
        self.set_anchors_visible(scene, true);
    }

    pub fn disable(&mut self, scene: &mut Scene) {
        self.is_active = false;
        self.set_anchors_visible(scene, false);
    }

    /// Rebuild anchors from the shape's current geometry and show them.
    pub fn reset_anchors(&mut self, scene: &mut Scene) {
        self.remove_anchors(scene);
        self.add_anchors(scene);
        self.set_anchors_visible(scene, true);
    }

    /// Bind (`true`) or unbind (`false`) the interaction protocol on every anchor.
    pub fn set_anchors_active(&mut self, scene: &mut Scene, flag: bool) {
        let Some(group) = self.current_group(scene) else {
            return;
        };
        let display_name = group.shape().display_name();
        for anchor in group.anchors_mut() {
            if flag {
                binding::set_anchor_on(
                    anchor,
                    &display_name,
                    self.update_function.clone(),
                    self.image.clone(),
                );
            } else {
                binding::set_anchor_off(anchor);
            }
        }
    }

    /// Deliver a host pointer event to one of the edited shape's anchors.
    pub fn handle_pointer_event(
        &self,
        scene: &mut Scene,
        anchor: AnchorId,
        event: PointerEvent,
    ) -> EventFlow {
        let context = DispatchContext {
            app: &self.app,
            on_draw: self.draw_event_callback.clone(),
        };
        binding::dispatch(scene, anchor, event, &context)
    }

    fn current_group<'s>(&self, scene: &'s mut Scene) -> Option<&'s mut Group> {
        let id = self.shape?;
        scene.group_mut(id)
    }

    fn set_anchors_visible(&self, scene: &mut Scene, visible: bool) {
        let Some(group) = self.current_group(scene) else {
            return;
        };
        for anchor in group.anchors_mut() {
            anchor.set_visible(visible);
        }
        let layer = group.layer();
        if let Some(layer) = layer {
            scene.draw(layer);
        }
    }

    fn remove_anchors(&self, scene: &mut Scene) {
        if let Some(group) = self.current_group(scene) {
            let removed = group.remove_anchors();
            if removed > 0 {
                tracing::trace!("Removed {} anchors from group {}", removed, group.id());
            }
        }
    }

    fn add_anchors(&mut self, scene: &mut Scene) {
        let Some(group_id) = self.shape else {
            return;
        };
        let Some(group) = scene.group(group_id) else {
            return;
        };
        if group.layer().is_none() {
            return;
        }

        let layout = ShapeAnchorLayout::for_shape(group.shape());
        let display_name = group.shape().display_name();
        self.update_function = layout.update.and_then(|kind| {
            let function = self.registry.get(kind);
            if function.is_none() {
                tracing::debug!("No recompute function registered for {}", kind);
            }
            function
        });

        let app = self.app.borrow();
        for spec in layout.anchors {
            let id = scene.next_anchor_id();
            let binding = binding::AnchorBinding::new(
                display_name.as_str(),
                self.update_function.clone(),
                self.image.clone(),
            );
            let anchor = self.factory.create_anchor(
                &*app,
                id,
                group_id,
                spec.position,
                spec.role,
                binding,
            );
            if let Some(group) = scene.group_mut(group_id) {
                group.add_anchor(anchor);
            }
        }
    }
}

impl fmt::Debug for ShapeEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeEditor")
            .field("shape", &self.shape)
            .field("is_active", &self.is_active)
            .field("has_image", &self.image.is_some())
            .field("has_update_function", &self.update_function.is_some())
            .field("registry", &self.registry)
            .finish()
    }
}
