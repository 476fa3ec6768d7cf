//! Bounded undo/redo stack of scene commands.

use crate::commands::{ChangeCommand, Command};
use crate::scene::Scene;

const DEFAULT_DEPTH: usize = 50;

#[derive(Debug)]
pub struct UndoStack<C: Command = ChangeCommand> {
    undo_stack: Vec<C>,
    redo_stack: Vec<C>,
    max_depth: usize,
}

impl<C: Command> UndoStack<C> {
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create with custom maximum undo depth (at least one).
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Record a command that has already been executed.
    pub fn record(&mut self, command: C) {
        self.redo_stack.clear();
        self.undo_stack.push(command);
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
    }

    /// Execute a command and record it.
    pub fn push(&mut self, mut command: C, scene: &mut Scene) {
        command.execute(scene);
        self.record(command);
    }

    /// Undo the last command. Returns false if there was nothing to undo.
    pub fn undo(&mut self, scene: &mut Scene) -> bool {
        match self.undo_stack.pop() {
            Some(mut command) => {
                command.undo(scene);
                self.redo_stack.push(command);
                true
            }
            None => false,
        }
    }

    /// Redo the last undone command. Returns false if there was nothing to redo.
    pub fn redo(&mut self, scene: &mut Scene) -> bool {
        match self.redo_stack.pop() {
            Some(mut command) => {
                command.execute(scene);
                self.undo_stack.push(command);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Most recent undoable command.
    pub fn last(&self) -> Option<&C> {
        self.undo_stack.last()
    }

    /// Undoable commands, oldest first.
    pub fn commands(&self) -> &[C] {
        &self.undo_stack
    }

    pub fn undo_name(&self) -> Option<&str> {
        self.undo_stack.last().map(|command| command.name())
    }

    pub fn redo_name(&self) -> Option<&str> {
        self.redo_stack.last().map(|command| command.name())
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl<C: Command> Default for UndoStack<C> {
    fn default() -> Self {
        Self::new()
    }
}
