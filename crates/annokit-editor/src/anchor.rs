//! Anchors: the draggable handles attached to the edited shape.

use serde::{Deserialize, Serialize};
use std::fmt;

use annokit_settings::AnchorSettings;

use crate::app::EditorApp;
use crate::binding::{AnchorBinding, BindingToken};
use crate::model::Point;
use crate::scene::{AnchorId, GroupId};

/// What an anchor controls on its shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorRole {
    /// Line point addressed by its raw index in the flat points array.
    Index(usize),
    Begin,
    End,
    Mid,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl fmt::Display for AnchorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnchorRole::Index(i) => write!(f, "{}", i),
            AnchorRole::Begin => write!(f, "begin"),
            AnchorRole::End => write!(f, "end"),
            AnchorRole::Mid => write!(f, "mid"),
            AnchorRole::TopLeft => write!(f, "topLeft"),
            AnchorRole::TopRight => write!(f, "topRight"),
            AnchorRole::BottomRight => write!(f, "bottomRight"),
            AnchorRole::BottomLeft => write!(f, "bottomLeft"),
        }
    }
}

/// Immutable copy of an anchor's position and role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorSnapshot {
    pub group: GroupId,
    pub role: AnchorRole,
    pub x: f64,
    pub y: f64,
}

impl AnchorSnapshot {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnchorStyle {
    /// Current stroke colour.
    pub stroke: String,
    pub rest_stroke: String,
    pub hover_stroke: String,
    pub fill: String,
    pub stroke_width: f64,
    pub radius: f64,
}

#[derive(Debug, Clone)]
pub struct Anchor {
    id: AnchorId,
    group: GroupId,
    role: AnchorRole,
    position: Point,
    style: AnchorStyle,
    visible: bool,
    draggable: bool,
    binding: Option<AnchorBinding>,
}

impl Anchor {
    pub fn id(&self) -> AnchorId {
        self.id
    }

    pub fn group(&self) -> GroupId {
        self.group
    }

    pub fn role(&self) -> &AnchorRole {
        &self.role
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn style(&self) -> &AnchorStyle {
        &self.style
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.style.stroke = if hovered {
            self.style.hover_stroke.clone()
        } else {
            self.style.rest_stroke.clone()
        };
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    pub fn snapshot(&self) -> AnchorSnapshot {
        AnchorSnapshot {
            group: self.group,
            role: self.role.clone(),
            x: self.position.x,
            y: self.position.y,
        }
    }

    pub fn binding(&self) -> Option<&AnchorBinding> {
        self.binding.as_ref()
    }

    pub fn binding_mut(&mut self) -> Option<&mut AnchorBinding> {
        self.binding.as_mut()
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Number of pointer events this anchor currently listens to.
    pub fn listener_count(&self) -> usize {
        self.binding
            .as_ref()
            .map_or(0, |binding| binding.listened_events().len())
    }

    /// Install a binding, replacing any previous one.
    pub fn bind(&mut self, binding: AnchorBinding) -> BindingToken {
        let token = binding.token();
        if let Some(previous) = self.binding.replace(binding) {
            tracing::debug!(
                "Anchor {} rebound ({} -> {})",
                self.id,
                previous.token(),
                token
            );
        }
        token
    }

    /// Remove the binding identified by `token`. Returns false if it is not installed.
    pub fn unbind(&mut self, token: BindingToken) -> bool {
        if self.binding.as_ref().is_some_and(|b| b.token() == token) {
            self.binding = None;
            true
        } else {
            false
        }
    }
}

/// Builds anchors styled for the current view.
#[derive(Debug, Clone, Default)]
pub struct AnchorFactory {
    settings: AnchorSettings,
}

impl AnchorFactory {
    pub fn new(settings: AnchorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AnchorSettings {
        &self.settings
    }

    /// Create a hidden, draggable anchor with its interaction protocol bound.
    ///
    /// Stroke width and radius are divided by the view scale so anchors keep
    /// a constant on-screen size whatever the zoom.
    pub fn create_anchor(
        &self,
        app: &dyn EditorApp,
        id: AnchorId,
        group: GroupId,
        position: Point,
        role: AnchorRole,
        binding: AnchorBinding,
    ) -> Anchor {
        let scale = app.scale();
        let style = app.style();
        let mut anchor = Anchor {
            id,
            group,
            role,
            position,
            style: AnchorStyle {
                stroke: self.settings.stroke.clone(),
                rest_stroke: self.settings.stroke.clone(),
                hover_stroke: self.settings.hover_stroke.clone(),
                fill: self.settings.fill.clone(),
                stroke_width: style.scaled_stroke_width() / scale,
                radius: style.scale(self.settings.base_radius) / scale,
            },
            visible: false,
            draggable: true,
            binding: None,
        };
        anchor.bind(binding);
        anchor
    }
}
