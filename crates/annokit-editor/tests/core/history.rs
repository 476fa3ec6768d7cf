use std::cell::RefCell;
use std::rc::Rc;

use annokit_editor::{Command, Scene, UndoStack};

struct Recorded {
    name: String,
    log: Rc<RefCell<Vec<String>>>,
}

impl Command for Recorded {
    fn execute(&mut self, _scene: &mut Scene) {
        self.log.borrow_mut().push(format!("do {}", self.name));
    }

    fn undo(&mut self, _scene: &mut Scene) {
        self.log.borrow_mut().push(format!("undo {}", self.name));
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn command(name: &str, log: &Rc<RefCell<Vec<String>>>) -> Recorded {
    Recorded {
        name: name.to_string(),
        log: log.clone(),
    }
}

#[test]
fn test_record_does_not_execute() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut stack = UndoStack::new();
    stack.record(command("a", &log));
    assert!(log.borrow().is_empty());
    assert!(stack.can_undo());
    assert_eq!(stack.undo_name(), Some("a"));
}

#[test]
fn test_undo_redo_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut scene = Scene::new();
    let mut stack = UndoStack::new();
    stack.push(command("a", &log), &mut scene);
    stack.push(command("b", &log), &mut scene);

    assert!(stack.undo(&mut scene));
    assert!(stack.undo(&mut scene));
    assert!(!stack.undo(&mut scene));
    assert!(stack.redo(&mut scene));

    assert_eq!(
        *log.borrow(),
        vec!["do a", "do b", "undo b", "undo a", "do a"]
    );
    assert_eq!(stack.undo_count(), 1);
    assert_eq!(stack.redo_count(), 1);
    assert_eq!(stack.redo_name(), Some("b"));
}

#[test]
fn test_new_record_clears_redo() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut scene = Scene::new();
    let mut stack = UndoStack::new();
    stack.record(command("a", &log));
    stack.undo(&mut scene);
    assert!(stack.can_redo());

    stack.record(command("b", &log));
    assert!(!stack.can_redo());
}

#[test]
fn test_depth_is_bounded() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut stack = UndoStack::with_depth(3);
    for i in 0..5 {
        stack.record(command(&format!("c{}", i), &log));
    }
    assert_eq!(stack.undo_count(), 3);
    let names: Vec<&str> = stack.commands().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["c2", "c3", "c4"]);

    stack.clear();
    assert!(!stack.can_undo());
}
