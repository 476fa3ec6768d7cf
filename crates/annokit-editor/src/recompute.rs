//! Geometry recompute functions supplied by the host.
//!
//! A recompute function receives the live group and a snapshot of one anchor.
//! It moves the group's anchor with the snapshot's role to the snapshot
//! position, then derives the shape geometry and label from the anchors.
//! Applying the same snapshot twice must give the same result.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use annokit_core::Image;

use crate::anchor::AnchorSnapshot;
use crate::model::LineKind;
use crate::scene::Group;

pub type RecomputeFn = Rc<dyn Fn(&mut Group, &AnchorSnapshot, Option<&Image>)>;

/// Which recompute function a shape variant needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateKind {
    Arrow,
    Ruler,
    Protractor,
    Roi,
    FreeHand,
    Rectangle,
    Ellipse,
}

impl UpdateKind {
    /// Recompute kind for a line sub-kind; `None` for unknown kinds.
    pub fn for_line(kind: &LineKind) -> Option<Self> {
        match kind {
            LineKind::Arrow => Some(UpdateKind::Arrow),
            LineKind::Ruler => Some(UpdateKind::Ruler),
            LineKind::Protractor => Some(UpdateKind::Protractor),
            LineKind::Roi => Some(UpdateKind::Roi),
            LineKind::FreeHand => Some(UpdateKind::FreeHand),
            LineKind::Other(_) => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UpdateKind::Arrow => "arrow-update",
            UpdateKind::Ruler => "ruler-update",
            UpdateKind::Protractor => "protractor-update",
            UpdateKind::Roi => "roi-update",
            UpdateKind::FreeHand => "freehand-update",
            UpdateKind::Rectangle => "rectangle-update",
            UpdateKind::Ellipse => "ellipse-update",
        }
    }
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Recompute functions registered by the host, keyed by kind.
#[derive(Clone, Default)]
pub struct RecomputeRegistry {
    functions: HashMap<UpdateKind, RecomputeFn>,
}

impl RecomputeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, kind: UpdateKind, function: F)
    where
        F: Fn(&mut Group, &AnchorSnapshot, Option<&Image>) + 'static,
    {
        self.functions.insert(kind, Rc::new(function));
    }

    pub fn with<F>(mut self, kind: UpdateKind, function: F) -> Self
    where
        F: Fn(&mut Group, &AnchorSnapshot, Option<&Image>) + 'static,
    {
        self.register(kind, function);
        self
    }

    pub fn get(&self, kind: UpdateKind) -> Option<RecomputeFn> {
        self.functions.get(&kind).cloned()
    }

    pub fn contains(&self, kind: UpdateKind) -> bool {
        self.functions.contains_key(&kind)
    }
}

impl fmt::Debug for RecomputeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&str> = self.functions.keys().map(UpdateKind::name).collect();
        kinds.sort_unstable();
        f.debug_struct("RecomputeRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}
