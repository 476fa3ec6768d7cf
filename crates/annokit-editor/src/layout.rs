//! Where each shape variant places its anchors and what each anchor means.

use crate::anchor::AnchorRole;
use crate::model::{LineKind, LineShape, Point, Shape};
use crate::recompute::UpdateKind;

/// Position and role of one anchor to create.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorSpec {
    pub position: Point,
    pub role: AnchorRole,
}

impl AnchorSpec {
    fn new(position: Point, role: AnchorRole) -> Self {
        Self { position, role }
    }
}

/// Anchor layout of a shape, with the recompute kind it needs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeAnchorLayout {
    pub anchors: Vec<AnchorSpec>,
    pub update: Option<UpdateKind>,
}

impl ShapeAnchorLayout {
    pub fn for_shape(shape: &Shape) -> Self {
        match shape {
            Shape::Line(line) => Self::for_line(line),
            Shape::Rectangle(rect) => Self::corners(rect.corners(), UpdateKind::Rectangle),
            Shape::Ellipse(ellipse) => {
                Self::corners(ellipse.bounding_corners(), UpdateKind::Ellipse)
            }
            Shape::Other(other) => {
                tracing::warn!("No anchors for unknown shape '{}'", other.kind);
                Self::default()
            }
        }
    }

    fn for_line(line: &LineShape) -> Self {
        let last = line.point_count().saturating_sub(1) * 2;
        let anchors = line
            .absolute_points()
            .map(|(index, position)| AnchorSpec::new(position, line_role(&line.kind, index, last)))
            .collect();

        let update = UpdateKind::for_line(&line.kind);
        if update.is_none() {
            tracing::warn!("Cannot update unknown line shape '{}'", line.kind.display_name());
        }

        Self { anchors, update }
    }

    fn corners(corners: [Point; 4], update: UpdateKind) -> Self {
        let roles = [
            AnchorRole::TopLeft,
            AnchorRole::TopRight,
            AnchorRole::BottomRight,
            AnchorRole::BottomLeft,
        ];
        Self {
            anchors: corners
                .into_iter()
                .zip(roles)
                .map(|(position, role)| AnchorSpec::new(position, role))
                .collect(),
            update: Some(update),
        }
    }

    pub fn roles(&self) -> Vec<AnchorRole> {
        self.anchors.iter().map(|spec| spec.role.clone()).collect()
    }
}

fn line_role(kind: &LineKind, index: usize, last: usize) -> AnchorRole {
    let named_ends = matches!(
        kind,
        LineKind::Arrow | LineKind::Ruler | LineKind::Protractor
    );
    if matches!(kind, LineKind::Protractor) && index == 2 {
        return AnchorRole::Mid;
    }
    if named_ends && index == 0 {
        AnchorRole::Begin
    } else if named_ends && index == last {
        AnchorRole::End
    } else {
        AnchorRole::Index(index)
    }
}
