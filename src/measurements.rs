//! Recompute functions for the built-in annotation kinds.
//!
//! Each function moves the anchor named by the snapshot, rebuilds the shape
//! from the group's anchors and refreshes the measurement label. A group that
//! is not being edited has no anchors; the snapshot is then applied to the
//! shape geometry directly, so undo and redo work after the selection moved.
//! Lengths and areas use the image spacing when an image is available, pixels
//! otherwise.

use annokit_core::Image;
use annokit_editor::{
    AnchorRole, AnchorSnapshot, EllipseShape, Group, Label, LineKind, Point, RecomputeRegistry,
    RectShape, UpdateKind,
};

/// Registry holding a recompute function for every built-in kind.
pub fn default_registry() -> RecomputeRegistry {
    RecomputeRegistry::new()
        .with(UpdateKind::Arrow, update_line)
        .with(UpdateKind::Ruler, update_line)
        .with(UpdateKind::Protractor, update_line)
        .with(UpdateKind::Roi, update_line)
        .with(UpdateKind::FreeHand, update_line)
        .with(UpdateKind::Rectangle, update_rectangle)
        .with(UpdateKind::Ellipse, update_ellipse)
}

/// Returns false when the group has no anchor with the snapshot's role.
fn move_anchor(group: &mut Group, snapshot: &AnchorSnapshot) -> bool {
    match group.anchor_by_role_mut(&snapshot.role) {
        Some(anchor) => {
            anchor.set_position(snapshot.position());
            true
        }
        None => false,
    }
}

fn anchor_position(group: &Group, role: AnchorRole) -> Option<Point> {
    group.anchor_by_role(&role).map(|a| a.position())
}

/// Raw index in the points array addressed by a line anchor role.
fn point_index(role: &AnchorRole, point_count: usize) -> Option<usize> {
    match role {
        AnchorRole::Index(i) => Some(*i),
        AnchorRole::Begin => Some(0),
        AnchorRole::Mid => Some(2),
        AnchorRole::End => Some(point_count.saturating_sub(1) * 2),
        _ => None,
    }
}

fn length_text(pixels_dx: f64, pixels_dy: f64, image: Option<&Image>) -> String {
    match image {
        Some(image) => format!(
            "{:.2} {}",
            image.physical_length(pixels_dx, pixels_dy),
            image.unit()
        ),
        None => format!("{:.2} px", pixels_dx.hypot(pixels_dy)),
    }
}

fn area_text(width: f64, height: f64, factor: f64, image: Option<&Image>) -> String {
    match image {
        Some(image) => format!(
            "{:.2} {}²",
            image.physical_area(width, height) * factor,
            image.unit()
        ),
        None => format!("{:.2} px²", (width * height).abs() * factor),
    }
}

pub fn update_line(group: &mut Group, snapshot: &AnchorSnapshot, image: Option<&Image>) {
    let anchored = move_anchor(group, snapshot);

    let Some(point_count) = group.shape().as_line().map(|line| line.point_count()) else {
        tracing::warn!("Line update on a {}", group.name());
        return;
    };
    let moves: Vec<(usize, Point)> = if anchored {
        group
            .anchors()
            .iter()
            .filter_map(|a| point_index(a.role(), point_count).map(|i| (i, a.position())))
            .collect()
    } else {
        point_index(&snapshot.role, point_count)
            .map(|i| (i, snapshot.position()))
            .into_iter()
            .collect()
    };

    let Some(line) = group.shape_mut().as_line_mut() else {
        return;
    };
    for (index, position) in moves {
        line.set_point_at(index, position);
    }

    let points: Vec<Point> = line.absolute_points().map(|(_, p)| p).collect();
    let label = match (&line.kind, points.as_slice()) {
        (LineKind::Ruler, [begin, .., end]) => Some(Label::new(
            length_text(end.x - begin.x, end.y - begin.y, image),
            *end,
        )),
        (LineKind::Protractor, [begin, mid, end, ..]) => {
            let a = (begin.y - mid.y).atan2(begin.x - mid.x);
            let b = (end.y - mid.y).atan2(end.x - mid.x);
            let mut angle = (b - a).to_degrees().abs();
            if angle > 180.0 {
                angle = 360.0 - angle;
            }
            Some(Label::new(format!("{:.2}°", angle), *mid))
        }
        _ => None,
    };
    if label.is_some() {
        group.set_label(label);
    }
}

/// Keep the two neighbours of a dragged corner aligned with it.
fn align_corners(group: &mut Group, snapshot: &AnchorSnapshot) {
    let Point { x, y } = snapshot.position();
    let (horizontal, vertical) = match snapshot.role {
        AnchorRole::TopLeft => (AnchorRole::TopRight, AnchorRole::BottomLeft),
        AnchorRole::TopRight => (AnchorRole::TopLeft, AnchorRole::BottomRight),
        AnchorRole::BottomRight => (AnchorRole::BottomLeft, AnchorRole::TopRight),
        AnchorRole::BottomLeft => (AnchorRole::BottomRight, AnchorRole::TopLeft),
        _ => return,
    };
    if let Some(anchor) = group.anchor_by_role_mut(&horizontal) {
        let px = anchor.x();
        anchor.set_position(Point::new(px, y));
    }
    if let Some(anchor) = group.anchor_by_role_mut(&vertical) {
        let py = anchor.y();
        anchor.set_position(Point::new(x, py));
    }
}

fn corners(group: &Group) -> Option<(Point, Point)> {
    Some((
        anchor_position(group, AnchorRole::TopLeft)?,
        anchor_position(group, AnchorRole::BottomRight)?,
    ))
}

/// Move the snapshot's corner of the box `top_left`..`bottom_right`.
fn replace_corner(
    top_left: Point,
    bottom_right: Point,
    snapshot: &AnchorSnapshot,
) -> Option<(Point, Point)> {
    let p = snapshot.position();
    match snapshot.role {
        AnchorRole::TopLeft => Some((p, bottom_right)),
        AnchorRole::BottomRight => Some((top_left, p)),
        AnchorRole::TopRight => Some((
            Point::new(top_left.x, p.y),
            Point::new(p.x, bottom_right.y),
        )),
        AnchorRole::BottomLeft => Some((
            Point::new(p.x, top_left.y),
            Point::new(bottom_right.x, p.y),
        )),
        _ => None,
    }
}

/// Corners after applying `snapshot`, from the anchors when present and from
/// the shape's bounding box otherwise.
fn moved_corners(
    group: &mut Group,
    snapshot: &AnchorSnapshot,
    bounds: impl Fn(&Group) -> Option<[Point; 4]>,
) -> Option<(Point, Point)> {
    if move_anchor(group, snapshot) {
        align_corners(group, snapshot);
        return corners(group);
    }
    let [top_left, _, bottom_right, _] = bounds(group)?;
    replace_corner(top_left, bottom_right, snapshot)
}

pub fn update_rectangle(group: &mut Group, snapshot: &AnchorSnapshot, image: Option<&Image>) {
    let moved = moved_corners(group, snapshot, |g| {
        g.shape().as_rectangle().map(RectShape::corners)
    });
    let Some((top_left, bottom_right)) = moved else {
        return;
    };
    let rect = RectShape::from_corners(top_left, bottom_right);
    let label = Label::new(
        area_text(rect.width, rect.height, 1.0, image),
        Point::new(rect.x, rect.y + rect.height),
    );
    if let Some(shape) = group.shape_mut().as_rectangle_mut() {
        *shape = rect;
        group.set_label(Some(label));
    }
}

pub fn update_ellipse(group: &mut Group, snapshot: &AnchorSnapshot, image: Option<&Image>) {
    let moved = moved_corners(group, snapshot, |g| {
        g.shape().as_ellipse().map(EllipseShape::bounding_corners)
    });
    let Some((top_left, bottom_right)) = moved else {
        return;
    };
    let ellipse = EllipseShape::from_corners(top_left, bottom_right);
    let label = Label::new(
        area_text(ellipse.rx * 2.0, ellipse.ry * 2.0, std::f64::consts::FRAC_PI_4, image),
        Point::new(ellipse.center.x, ellipse.center.y + ellipse.ry),
    );
    if let Some(shape) = group.shape_mut().as_ellipse_mut() {
        *shape = ellipse;
        group.set_label(Some(label));
    }
}
