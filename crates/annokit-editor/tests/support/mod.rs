use std::cell::{Cell, RefCell};
use std::rc::Rc;

use annokit_core::{shared, DrawEvent, Image, Shared};
use annokit_editor::{
    AnchorId, AnchorRole, AnchorSnapshot, DrawEventCallback, EditorApp, EditorHost, Group,
    GroupId, LayerId, Point, PointerEvent, RecomputeRegistry, RectShape, Scene, Shape,
    ShapeEditor, UpdateKind,
};

pub struct Fixture {
    pub scene: Scene,
    pub layer: LayerId,
    pub host: Shared<EditorHost>,
    pub editor: ShapeEditor,
    pub calls: Rc<Cell<usize>>,
    pub events: Rc<RefCell<Vec<DrawEvent>>>,
}

impl Fixture {
    pub fn new() -> Self {
        let mut scene = Scene::new();
        let layer = scene.add_layer("draw");
        let host = shared(EditorHost::default());
        let calls = Rc::new(Cell::new(0));
        let app: Shared<dyn EditorApp> = host.clone();
        let mut editor = ShapeEditor::new(app, registry(calls.clone()));

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let callback: DrawEventCallback = Rc::new(move |event: &DrawEvent| {
            sink.borrow_mut().push(event.clone())
        });
        editor.set_draw_event_callback(Some(callback));

        Self {
            scene,
            layer,
            host,
            editor,
            calls,
            events,
        }
    }

    pub fn add(&mut self, shape: impl Into<Shape>) -> GroupId {
        self.scene
            .add_group(Some(self.layer), shape)
            .expect("layer exists")
    }

    pub fn edit(&mut self, group: GroupId) {
        self.editor.set_shape(&mut self.scene, Some(group));
        self.editor.enable(&mut self.scene);
    }

    pub fn anchor(&self, group: GroupId, role: AnchorRole) -> AnchorId {
        self.scene
            .group(group)
            .and_then(|g| g.anchor_by_role(&role))
            .map(|a| a.id())
            .expect("anchor with role")
    }

    pub fn position(&self, anchor: AnchorId) -> Point {
        self.scene
            .anchor(anchor)
            .map(|a| a.position())
            .expect("anchor exists")
    }

    pub fn send(&mut self, anchor: AnchorId, event: PointerEvent) {
        self.editor
            .handle_pointer_event(&mut self.scene, anchor, event);
    }

    /// Full drag of `anchor` through `moves`.
    pub fn drag(&mut self, anchor: AnchorId, moves: &[Point]) {
        self.send(anchor, PointerEvent::DragStart);
        for position in moves {
            self.send(anchor, PointerEvent::DragMove(*position));
        }
        self.send(anchor, PointerEvent::DragEnd);
    }

    pub fn draw_count(&self) -> u64 {
        self.scene
            .layer(self.layer)
            .map(|l| l.draw_count())
            .unwrap_or_default()
    }

    pub fn rect(&self, group: GroupId) -> RectShape {
        self.scene
            .group(group)
            .and_then(|g| g.shape().as_rectangle())
            .cloned()
            .expect("rectangle group")
    }
}

/// Move the anchor with the snapshot's role to the snapshot position.
pub fn follow(group: &mut Group, snapshot: &AnchorSnapshot) {
    if let Some(anchor) = group.anchor_by_role_mut(&snapshot.role) {
        anchor.set_position(snapshot.position());
    }
}

fn update_rectangle(group: &mut Group, snapshot: &AnchorSnapshot, _image: Option<&Image>) {
    follow(group, snapshot);
    let corner = |role: AnchorRole| group.anchor_by_role(&role).map(|a| a.position());
    let diagonal = match snapshot.role {
        AnchorRole::TopRight | AnchorRole::BottomLeft => {
            (corner(AnchorRole::BottomLeft), corner(AnchorRole::TopRight))
        }
        _ => (corner(AnchorRole::TopLeft), corner(AnchorRole::BottomRight)),
    };
    if let (Some(a), Some(b)) = diagonal {
        if let Some(rect) = group.shape_mut().as_rectangle_mut() {
            *rect = RectShape::from_corners(a, b);
        }
    }
}

fn registry(calls: Rc<Cell<usize>>) -> RecomputeRegistry {
    let mut registry = RecomputeRegistry::new();
    let counter = calls.clone();
    registry.register(UpdateKind::Rectangle, move |group, snapshot, image| {
        counter.set(counter.get() + 1);
        update_rectangle(group, snapshot, image);
    });
    for kind in [
        UpdateKind::Arrow,
        UpdateKind::Ruler,
        UpdateKind::Protractor,
        UpdateKind::Roi,
        UpdateKind::FreeHand,
        UpdateKind::Ellipse,
    ] {
        let counter = calls.clone();
        registry.register(kind, move |group, snapshot, _image| {
            counter.set(counter.get() + 1);
            follow(group, snapshot);
        });
    }
    registry
}
