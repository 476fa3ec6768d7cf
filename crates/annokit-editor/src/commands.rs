use std::fmt;
use std::rc::Rc;

use annokit_core::{CommandPhase, DrawEvent, Image};

use crate::anchor::AnchorSnapshot;
use crate::recompute::RecomputeFn;
use crate::scene::{LayerId, Scene};

/// Callback receiving a notification whenever a command is applied or undone.
pub type DrawEventCallback = Rc<dyn Fn(&DrawEvent)>;

/// A command that can be executed and undone on the scene.
pub trait Command {
    /// Executes the command.
    fn execute(&mut self, scene: &mut Scene);

    /// Undoes the command.
    fn undo(&mut self, scene: &mut Scene);

    /// Returns the name of the command for display.
    fn name(&self) -> &str;
}

/// One completed anchor drag: applies the final snapshot on execute and the
/// baseline snapshot on undo.
#[derive(Clone)]
pub struct ChangeCommand {
    name: String,
    update: Option<RecomputeFn>,
    start: AnchorSnapshot,
    end: AnchorSnapshot,
    layer: Option<LayerId>,
    image: Option<Rc<Image>>,
    /// Called after the command is executed.
    pub on_execute: Option<DrawEventCallback>,
    /// Called after the command is undone.
    pub on_undo: Option<DrawEventCallback>,
}

impl ChangeCommand {
    pub fn new(
        display_name: &str,
        update: Option<RecomputeFn>,
        start: AnchorSnapshot,
        end: AnchorSnapshot,
        layer: Option<LayerId>,
        image: Option<Rc<Image>>,
    ) -> Self {
        Self {
            name: format!("Change-{}", display_name),
            update,
            start,
            end,
            layer,
            image,
            on_execute: None,
            on_undo: None,
        }
    }

    pub fn start(&self) -> &AnchorSnapshot {
        &self.start
    }

    pub fn end(&self) -> &AnchorSnapshot {
        &self.end
    }

    pub fn layer(&self) -> Option<LayerId> {
        self.layer
    }

    /// True when the drag ended where it started.
    pub fn is_noop(&self) -> bool {
        self.start == self.end
    }

    fn apply(&self, scene: &mut Scene, snapshot: &AnchorSnapshot, phase: CommandPhase) {
        match (&self.update, scene.group_mut(snapshot.group)) {
            (Some(update), Some(group)) => update(group, snapshot, self.image.as_deref()),
            (Some(_), None) => {
                tracing::warn!("{}: group {} no longer exists", self.name, snapshot.group)
            }
            (None, _) => tracing::debug!("{}: no update function", self.name),
        }

        if let Some(layer) = self.layer {
            scene.draw(layer);
        }

        let callback = match phase {
            CommandPhase::Executed => &self.on_execute,
            CommandPhase::Undone => &self.on_undo,
        };
        if let Some(callback) = callback {
            callback(&DrawEvent::change(snapshot.group.0, self.name.as_str(), phase));
        }
    }
}

impl Command for ChangeCommand {
    fn execute(&mut self, scene: &mut Scene) {
        tracing::debug!("Execute {}", self.name);
        let end = self.end.clone();
        self.apply(scene, &end, CommandPhase::Executed);
    }

    fn undo(&mut self, scene: &mut Scene) {
        tracing::debug!("Undo {}", self.name);
        let start = self.start.clone();
        self.apply(scene, &start, CommandPhase::Undone);
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for ChangeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeCommand")
            .field("name", &self.name)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("layer", &self.layer)
            .field("has_update", &self.update.is_some())
            .finish()
    }
}
