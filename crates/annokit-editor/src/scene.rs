//! In-memory scene graph: layers, annotation groups and their anchors.
//!
//! The scene does no rendering. A draw request on a layer only bumps the
//! layer's draw counter so hosts (and tests) can observe redraws.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::anchor::{Anchor, AnchorRole};
use crate::error::{SceneError, SceneResult};
use crate::model::{Label, Shape};

macro_rules! scene_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }
    };
}

scene_id!(LayerId);
scene_id!(GroupId);
scene_id!(AnchorId);

/// Drawing surface.
#[derive(Debug, Clone)]
pub struct Layer {
    id: LayerId,
    name: String,
    draw_count: u64,
}

impl Layer {
    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of draw requests received so far.
    pub fn draw_count(&self) -> u64 {
        self.draw_count
    }
}

/// One annotation: a shape, its anchors and an optional label.
#[derive(Debug, Clone)]
pub struct Group {
    id: GroupId,
    layer: Option<LayerId>,
    shape: Shape,
    anchors: Vec<Anchor>,
    label: Option<Label>,
}

impl Group {
    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn layer(&self) -> Option<LayerId> {
        self.layer
    }

    /// Variant name, e.g. `ruler-group`.
    pub fn name(&self) -> String {
        self.shape.group_name()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    pub fn set_label(&mut self, label: Option<Label>) {
        self.label = label;
    }

    /// Anchors in drawing order (last is on top).
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn anchors_mut(&mut self) -> &mut [Anchor] {
        &mut self.anchors
    }

    pub fn anchor(&self, id: AnchorId) -> Option<&Anchor> {
        self.anchors.iter().find(|a| a.id() == id)
    }

    pub fn anchor_mut(&mut self, id: AnchorId) -> Option<&mut Anchor> {
        self.anchors.iter_mut().find(|a| a.id() == id)
    }

    pub fn anchor_by_role(&self, role: &AnchorRole) -> Option<&Anchor> {
        self.anchors.iter().find(|a| a.role() == role)
    }

    pub fn anchor_by_role_mut(&mut self, role: &AnchorRole) -> Option<&mut Anchor> {
        self.anchors.iter_mut().find(|a| a.role() == role)
    }

    pub fn add_anchor(&mut self, anchor: Anchor) {
        self.anchors.push(anchor);
    }

    /// Remove every anchor; returns how many were removed.
    pub fn remove_anchors(&mut self) -> usize {
        let count = self.anchors.len();
        self.anchors.clear();
        count
    }

    /// Raise an anchor above its siblings.
    pub fn move_anchor_to_top(&mut self, id: AnchorId) -> bool {
        match self.anchors.iter().position(|a| a.id() == id) {
            Some(index) => {
                let anchor = self.anchors.remove(index);
                self.anchors.push(anchor);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct Scene {
    layers: BTreeMap<LayerId, Layer>,
    groups: BTreeMap<GroupId, Group>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    fn generate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn add_layer(&mut self, name: impl Into<String>) -> LayerId {
        let id = LayerId(self.generate_id());
        self.layers.insert(
            id,
            Layer {
                id,
                name: name.into(),
                draw_count: 0,
            },
        );
        id
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(&id)
    }

    /// Request a redraw of a layer. Returns false if the layer is unknown.
    pub fn draw(&mut self, id: LayerId) -> bool {
        match self.layers.get_mut(&id) {
            Some(layer) => {
                layer.draw_count += 1;
                tracing::trace!("Draw layer {} ({})", id, layer.name);
                true
            }
            None => false,
        }
    }

    /// Add a group holding `shape`, optionally attached to a layer.
    pub fn add_group(
        &mut self,
        layer: Option<LayerId>,
        shape: impl Into<Shape>,
    ) -> SceneResult<GroupId> {
        if let Some(layer) = layer {
            if !self.layers.contains_key(&layer) {
                return Err(SceneError::LayerNotFound(layer));
            }
        }
        let id = GroupId(self.generate_id());
        self.groups.insert(
            id,
            Group {
                id,
                layer,
                shape: shape.into(),
                anchors: Vec::new(),
                label: None,
            },
        );
        Ok(id)
    }

    pub fn attach_group(&mut self, group: GroupId, layer: LayerId) -> SceneResult<()> {
        if !self.layers.contains_key(&layer) {
            return Err(SceneError::LayerNotFound(layer));
        }
        let group = self
            .groups
            .get_mut(&group)
            .ok_or(SceneError::GroupNotFound(group))?;
        group.layer = Some(layer);
        Ok(())
    }

    /// Detach a group from its layer, keeping it in the scene.
    pub fn detach_group(&mut self, group: GroupId) -> SceneResult<()> {
        let group = self
            .groups
            .get_mut(&group)
            .ok_or(SceneError::GroupNotFound(group))?;
        group.layer = None;
        Ok(())
    }

    pub fn remove_group(&mut self, id: GroupId) -> Option<Group> {
        self.groups.remove(&id)
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(&id)
    }

    pub fn group_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        self.groups.get_mut(&id)
    }

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    pub fn next_anchor_id(&mut self) -> AnchorId {
        AnchorId(self.generate_id())
    }

    /// Group holding the anchor with `id`.
    pub fn anchor_group(&self, id: AnchorId) -> Option<GroupId> {
        self.groups
            .values()
            .find(|g| g.anchor(id).is_some())
            .map(|g| g.id)
    }

    pub fn anchor(&self, id: AnchorId) -> Option<&Anchor> {
        self.groups.values().find_map(|g| g.anchor(id))
    }

    pub fn anchor_mut(&mut self, id: AnchorId) -> Option<&mut Anchor> {
        self.groups.values_mut().find_map(|g| g.anchor_mut(id))
    }
}
