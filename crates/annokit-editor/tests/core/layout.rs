use annokit_editor::{
    AnchorRole, LineKind, LineShape, Point, Shape, ShapeAnchorLayout, UpdateKind,
};
use proptest::prelude::*;

fn line(kind: LineKind, points: Vec<f64>) -> Shape {
    Shape::Line(LineShape::new(kind, points))
}

#[test]
fn test_ruler_roles() {
    let layout = ShapeAnchorLayout::for_shape(&line(LineKind::Ruler, vec![0.0, 0.0, 10.0, 0.0]));
    assert_eq!(layout.roles(), vec![AnchorRole::Begin, AnchorRole::End]);
    assert_eq!(layout.update, Some(UpdateKind::Ruler));
}

#[test]
fn test_protractor_roles() {
    let layout = ShapeAnchorLayout::for_shape(&line(
        LineKind::Protractor,
        vec![0.0, 0.0, 10.0, 0.0, 10.0, 10.0],
    ));
    assert_eq!(
        layout.roles(),
        vec![AnchorRole::Begin, AnchorRole::Mid, AnchorRole::End]
    );
    assert_eq!(layout.update, Some(UpdateKind::Protractor));
}

#[test]
fn test_freehand_roles_are_raw_indices() {
    let layout = ShapeAnchorLayout::for_shape(&line(
        LineKind::FreeHand,
        vec![0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0],
    ));
    assert_eq!(
        layout.roles(),
        vec![
            AnchorRole::Index(0),
            AnchorRole::Index(2),
            AnchorRole::Index(4),
            AnchorRole::Index(6),
            AnchorRole::Index(8)
        ]
    );
    assert_eq!(layout.update, Some(UpdateKind::FreeHand));
}

#[test]
fn test_roi_keeps_indices() {
    let layout = ShapeAnchorLayout::for_shape(&line(
        LineKind::Roi,
        vec![0.0, 0.0, 5.0, 0.0, 5.0, 5.0],
    ));
    assert_eq!(
        layout.roles(),
        vec![AnchorRole::Index(0), AnchorRole::Index(2), AnchorRole::Index(4)]
    );
    assert_eq!(layout.update, Some(UpdateKind::Roi));
}

#[test]
fn test_arrow_uses_line_group() {
    let shape = line(LineKind::Arrow, vec![0.0, 0.0, 3.0, 4.0]);
    assert_eq!(shape.group_name(), "line-group");
    let layout = ShapeAnchorLayout::for_shape(&shape);
    assert_eq!(layout.update, Some(UpdateKind::Arrow));
    assert_eq!(layout.roles(), vec![AnchorRole::Begin, AnchorRole::End]);
}

#[test]
fn test_line_anchor_positions_include_offset() {
    let shape = Shape::Line(
        LineShape::new(LineKind::Ruler, vec![0.0, 0.0, 10.0, 5.0])
            .with_offset(Point::new(100.0, 50.0)),
    );
    let layout = ShapeAnchorLayout::for_shape(&shape);
    assert_eq!(layout.anchors[0].position, Point::new(100.0, 50.0));
    assert_eq!(layout.anchors[1].position, Point::new(110.0, 55.0));
}

proptest! {
    #[test]
    fn prop_freehand_one_anchor_per_point(coords in prop::collection::vec(-1000.0f64..1000.0, 0..40)) {
        let count = coords.len() / 2;
        let layout = ShapeAnchorLayout::for_shape(&line(LineKind::FreeHand, coords));
        prop_assert_eq!(layout.anchors.len(), count);
        for (n, spec) in layout.anchors.iter().enumerate() {
            prop_assert_eq!(&spec.role, &AnchorRole::Index(n * 2));
        }
    }

    #[test]
    fn prop_ruler_ends_are_named(coords in prop::collection::vec(-1000.0f64..1000.0, 4..40)) {
        let layout = ShapeAnchorLayout::for_shape(&line(LineKind::Ruler, coords));
        let roles = layout.roles();
        prop_assert_eq!(roles.first(), Some(&AnchorRole::Begin));
        prop_assert_eq!(roles.last(), Some(&AnchorRole::End));
    }
}
