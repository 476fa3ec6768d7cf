use annokit_core::shared;
use annokit_editor::{
    AnchorRole, EditorApp, EditorHost, LineKind, LineShape, OtherShape, Point, RecomputeRegistry,
    RectShape, Scene, ShapeEditor,
};

use crate::support::Fixture;

#[test]
fn test_new_editor_is_idle() {
    let fixture = Fixture::new();
    assert_eq!(fixture.editor.shape(), None);
    assert!(!fixture.editor.is_active());
    assert!(fixture.editor.image().is_none());
}

#[test]
fn test_set_shape_creates_hidden_anchors() {
    let mut fixture = Fixture::new();
    let group = fixture.add(RectShape::new(10.0, 10.0, 100.0, 50.0));
    fixture.editor.set_shape(&mut fixture.scene, Some(group));

    let anchors = fixture.scene.group(group).map(|g| g.anchors().len());
    assert_eq!(anchors, Some(4));
    assert!(fixture
        .scene
        .group(group)
        .is_some_and(|g| g.anchors().iter().all(|a| !a.is_visible() && a.is_draggable())));
    assert!(!fixture.editor.is_active());
    assert!(fixture.editor.update_function().is_some());
}

#[test]
fn test_switching_shape_removes_previous_anchors() {
    let mut fixture = Fixture::new();
    let rect = fixture.add(RectShape::new(0.0, 0.0, 10.0, 10.0));
    let ruler = fixture.add(LineShape::new(LineKind::Ruler, vec![0.0, 0.0, 5.0, 5.0]));

    fixture.editor.set_shape(&mut fixture.scene, Some(rect));
    fixture.editor.set_shape(&mut fixture.scene, Some(ruler));

    assert_eq!(fixture.scene.group(rect).map(|g| g.anchors().len()), Some(0));
    assert_eq!(fixture.scene.group(ruler).map(|g| g.anchors().len()), Some(2));

    fixture.editor.set_shape(&mut fixture.scene, None);
    assert_eq!(fixture.scene.group(ruler).map(|g| g.anchors().len()), Some(0));
    assert_eq!(fixture.editor.shape(), None);
}

#[test]
fn test_set_same_shape_twice_does_not_duplicate_anchors() {
    let mut fixture = Fixture::new();
    let rect = fixture.add(RectShape::new(0.0, 0.0, 10.0, 10.0));
    fixture.editor.set_shape(&mut fixture.scene, Some(rect));
    fixture.editor.set_shape(&mut fixture.scene, Some(rect));
    assert_eq!(fixture.scene.group(rect).map(|g| g.anchors().len()), Some(4));
}

#[test]
fn test_shape_without_layer_gets_no_anchors() {
    let mut fixture = Fixture::new();
    let group = fixture
        .scene
        .add_group(None, RectShape::new(0.0, 0.0, 10.0, 10.0))
        .expect("group");
    fixture.editor.set_shape(&mut fixture.scene, Some(group));
    fixture.editor.enable(&mut fixture.scene);

    assert_eq!(fixture.editor.shape(), Some(group));
    assert!(fixture.editor.is_active());
    assert_eq!(fixture.scene.group(group).map(|g| g.anchors().len()), Some(0));
    assert_eq!(fixture.draw_count(), 0);
}

#[test]
fn test_other_shapes_are_inert() {
    let mut fixture = Fixture::new();
    let text = fixture.add(OtherShape::new("text"));
    fixture.edit(text);
    assert_eq!(fixture.scene.group(text).map(|g| g.anchors().len()), Some(0));
    assert!(fixture.editor.update_function().is_none());
}

#[test]
fn test_enable_disable_toggle_visibility_only() {
    let mut fixture = Fixture::new();
    let group = fixture.add(RectShape::new(10.0, 20.0, 30.0, 40.0));
    fixture.editor.set_shape(&mut fixture.scene, Some(group));
    let before = fixture.rect(group);

    fixture.editor.enable(&mut fixture.scene);
    assert!(fixture.editor.is_active());
    assert_eq!(fixture.draw_count(), 1);
    assert!(fixture
        .scene
        .group(group)
        .is_some_and(|g| g.anchors().iter().all(|a| a.is_visible())));

    fixture.editor.disable(&mut fixture.scene);
    assert!(!fixture.editor.is_active());
    assert_eq!(fixture.draw_count(), 2);
    assert!(fixture
        .scene
        .group(group)
        .is_some_and(|g| g.anchors().iter().all(|a| !a.is_visible())));

    assert_eq!(fixture.rect(group), before);
    assert_eq!(fixture.calls.get(), 0);
}

#[test]
fn test_enable_without_shape() {
    let mut fixture = Fixture::new();
    fixture.editor.enable(&mut fixture.scene);
    assert!(fixture.editor.is_active());
    fixture.editor.disable(&mut fixture.scene);
    assert!(!fixture.editor.is_active());
    assert_eq!(fixture.draw_count(), 0);
}

#[test]
fn test_reset_anchors_follows_external_geometry_change() {
    let mut fixture = Fixture::new();
    let group = fixture.add(RectShape::new(0.0, 0.0, 10.0, 10.0));
    fixture.editor.set_shape(&mut fixture.scene, Some(group));

    if let Some(rect) = fixture
        .scene
        .group_mut(group)
        .and_then(|g| g.shape_mut().as_rectangle_mut())
    {
        *rect = RectShape::new(50.0, 60.0, 20.0, 10.0);
    }
    fixture.editor.reset_anchors(&mut fixture.scene);

    let top_left = fixture.anchor(group, AnchorRole::TopLeft);
    let bottom_right = fixture.anchor(group, AnchorRole::BottomRight);
    assert_eq!(fixture.position(top_left), Point::new(50.0, 60.0));
    assert_eq!(fixture.position(bottom_right), Point::new(70.0, 70.0));
    assert!(fixture
        .scene
        .group(group)
        .is_some_and(|g| g.anchors().len() == 4 && g.anchors().iter().all(|a| a.is_visible())));
}

#[test]
fn test_anchor_size_follows_view_scale() {
    let mut scene = Scene::new();
    let layer = scene.add_layer("draw");
    let group = scene
        .add_group(Some(layer), RectShape::new(0.0, 0.0, 10.0, 10.0))
        .expect("group");

    let host = shared(EditorHost::default());
    host.borrow_mut().set_scale(2.0);
    let app: annokit_core::Shared<dyn EditorApp> = host.clone();
    let mut editor = ShapeEditor::new(app, RecomputeRegistry::new());
    editor.set_shape(&mut scene, Some(group));

    let anchor = scene
        .group(group)
        .and_then(|g| g.anchors().first().cloned())
        .expect("anchor");
    // default style: stroke width 2, display scale 1, base radius 6
    assert_eq!(anchor.style().radius, 3.0);
    assert_eq!(anchor.style().stroke_width, 1.0);
    assert_eq!(anchor.style().stroke, "#999");
    assert_eq!(anchor.style().fill, "rgba(100,100,100,0.7)");
    // no registered function for rectangles
    assert!(editor.update_function().is_none());
}
