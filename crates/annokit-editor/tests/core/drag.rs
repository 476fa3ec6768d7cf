use annokit_core::CommandPhase;
use annokit_editor::{
    AnchorRole, Command, LineKind, LineShape, Point, PointerEvent, RectShape,
};

use crate::support::Fixture;

#[test]
fn test_rectangle_corner_drag_commits_one_change() {
    let mut fixture = Fixture::new();
    let group = fixture.add(RectShape::new(10.0, 10.0, 100.0, 50.0));
    fixture.edit(group);
    let top_left = fixture.anchor(group, AnchorRole::TopLeft);

    let moves = [
        Point::new(8.0, 8.0),
        Point::new(5.0, 4.0),
        Point::new(0.0, 0.0),
    ];
    fixture.drag(top_left, &moves);

    // once per move, plus once when the change is executed
    assert!(
        fixture.calls.get() >= moves.len(),
        "recompute should run at least once per move, got {}",
        fixture.calls.get()
    );
    assert_eq!(fixture.rect(group), RectShape::new(0.0, 0.0, 110.0, 60.0));

    let host = fixture.host.borrow();
    assert_eq!(host.history().undo_count(), 1);
    let command = host.history().last().expect("command recorded");
    assert_eq!(command.name(), "Change-rectangle");
    assert_eq!(command.start().position(), Point::new(10.0, 10.0));
    assert_eq!(command.end().position(), Point::new(0.0, 0.0));
    assert_eq!(command.start().role, AnchorRole::TopLeft);
    assert_eq!(command.layer(), Some(fixture.layer));

    let events = fixture.events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].phase, CommandPhase::Executed);
    assert_eq!(events[0].group_id, group.0);
    assert_eq!(events[0].command, "Change-rectangle");
}

#[test]
fn test_undo_and_redo_restore_geometry() {
    let mut fixture = Fixture::new();
    let group = fixture.add(RectShape::new(10.0, 10.0, 100.0, 50.0));
    fixture.edit(group);
    let top_left = fixture.anchor(group, AnchorRole::TopLeft);
    fixture.drag(top_left, &[Point::new(0.0, 0.0)]);

    let draws = fixture.draw_count();
    assert!(fixture.host.borrow_mut().undo(&mut fixture.scene));
    assert_eq!(fixture.position(top_left), Point::new(10.0, 10.0));
    assert_eq!(fixture.rect(group), RectShape::new(10.0, 10.0, 100.0, 50.0));
    assert_eq!(fixture.draw_count(), draws + 1);

    assert!(fixture.host.borrow_mut().redo(&mut fixture.scene));
    assert_eq!(fixture.position(top_left), Point::new(0.0, 0.0));
    assert_eq!(fixture.rect(group), RectShape::new(0.0, 0.0, 110.0, 60.0));

    let phases: Vec<CommandPhase> = fixture.events.borrow().iter().map(|e| e.phase).collect();
    assert_eq!(
        phases,
        vec![
            CommandPhase::Executed,
            CommandPhase::Undone,
            CommandPhase::Executed
        ]
    );
}

#[test]
fn test_consecutive_drags_chain_snapshots() {
    let mut fixture = Fixture::new();
    let group = fixture.add(LineShape::new(LineKind::Ruler, vec![0.0, 0.0, 100.0, 0.0]));
    fixture.edit(group);
    let end = fixture.anchor(group, AnchorRole::End);

    fixture.drag(end, &[Point::new(120.0, 0.0)]);
    fixture.drag(end, &[Point::new(130.0, 10.0)]);

    let host = fixture.host.borrow();
    let commands = host.history().commands();
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0].name(), "Change-ruler");
    assert_eq!(
        commands[1].start(),
        commands[0].end(),
        "second drag should start where the first ended"
    );
    assert_eq!(commands[1].end().position(), Point::new(130.0, 10.0));
}

#[test]
fn test_undo_two_drags_returns_to_origin() {
    let mut fixture = Fixture::new();
    let group = fixture.add(LineShape::new(
        LineKind::Protractor,
        vec![0.0, 0.0, 50.0, 0.0, 50.0, 50.0],
    ));
    fixture.edit(group);
    let mid = fixture.anchor(group, AnchorRole::Mid);

    fixture.drag(mid, &[Point::new(60.0, 0.0)]);
    fixture.drag(mid, &[Point::new(70.0, 5.0)]);

    let mut host = fixture.host.borrow_mut();
    assert!(host.undo(&mut fixture.scene));
    assert_eq!(fixture.position(mid), Point::new(60.0, 0.0));
    assert!(host.undo(&mut fixture.scene));
    assert_eq!(fixture.position(mid), Point::new(50.0, 0.0));
    assert!(!host.undo(&mut fixture.scene));
}

#[test]
fn test_drag_end_without_start_is_noop_change() {
    let mut fixture = Fixture::new();
    let group = fixture.add(RectShape::new(0.0, 0.0, 10.0, 10.0));
    fixture.edit(group);
    let id = fixture.anchor(group, AnchorRole::BottomRight);

    fixture.send(id, PointerEvent::DragEnd);

    let host = fixture.host.borrow();
    let command = host.history().last().expect("command recorded");
    assert!(command.is_noop());
    assert_eq!(command.end().position(), Point::new(10.0, 10.0));
}

#[test]
fn test_drag_after_detach_still_commits() {
    let mut fixture = Fixture::new();
    let group = fixture.add(RectShape::new(0.0, 0.0, 10.0, 10.0));
    fixture.edit(group);
    let id = fixture.anchor(group, AnchorRole::TopRight);

    fixture.send(id, PointerEvent::DragStart);
    fixture.scene.detach_group(group).expect("detach");
    fixture.send(id, PointerEvent::DragMove(Point::new(20.0, -5.0)));
    fixture.send(id, PointerEvent::DragEnd);

    let host = fixture.host.borrow();
    let command = host.history().last().expect("command recorded");
    assert_eq!(command.layer(), None);
    assert_eq!(command.end().position(), Point::new(20.0, -5.0));
}

#[test]
fn test_no_draw_callback_still_commits() {
    let mut fixture = Fixture::new();
    fixture.editor.set_draw_event_callback(None);
    let group = fixture.add(RectShape::new(0.0, 0.0, 10.0, 10.0));
    fixture.edit(group);
    let id = fixture.anchor(group, AnchorRole::TopLeft);

    fixture.drag(id, &[Point::new(-5.0, -5.0)]);
    assert!(fixture.events.borrow().is_empty());
    assert!(fixture.host.borrow().history().can_undo());
}

#[test]
fn test_drag_state_tracks_start_and_end() {
    let mut fixture = Fixture::new();
    let group = fixture.add(RectShape::new(0.0, 0.0, 10.0, 10.0));
    fixture.edit(group);
    let id = fixture.anchor(group, AnchorRole::BottomRight);
    let dragging = |fixture: &Fixture| {
        fixture
            .scene
            .anchor(id)
            .and_then(|a| a.binding())
            .map(|b| b.is_dragging())
            .expect("bound anchor")
    };

    assert!(!dragging(&fixture));
    fixture.send(id, PointerEvent::DragStart);
    assert!(dragging(&fixture));
    fixture.send(id, PointerEvent::DragMove(Point::new(15.0, 15.0)));
    assert!(dragging(&fixture));
    fixture.send(id, PointerEvent::DragEnd);
    assert!(!dragging(&fixture));

    // a stray release still records a change from the last baseline
    fixture.send(id, PointerEvent::DragEnd);
    assert!(!dragging(&fixture));
    let host = fixture.host.borrow();
    assert_eq!(host.history().undo_count(), 2);
    assert!(host.history().last().expect("command recorded").is_noop());
}
