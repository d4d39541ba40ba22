//! Map renderer boundary.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::command::RenderCommand;

/// Executes [`RenderCommand`]s on an actual map (a platform map SDK, a canvas, a test double).
pub trait MapRenderer {
    /// Executes a single command.
    fn render(&mut self, command: &RenderCommand);
}

impl<T: FnMut(&RenderCommand)> MapRenderer for T {
    fn render(&mut self, command: &RenderCommand) {
        self(command)
    }
}

/// Renderer that stores all commands in memory.
///
/// Clones share the same storage, so a clone can be handed to a [`Session`](crate::Session) while
/// another clone is used to inspect what was rendered.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    commands: Arc<Mutex<Vec<RenderCommand>>>,
}

impl RecordingRenderer {
    /// Creates an empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all commands rendered so far.
    pub fn commands(&self) -> Vec<RenderCommand> {
        self.commands.lock().clone()
    }

    /// Removes and returns all commands rendered so far.
    pub fn take(&self) -> Vec<RenderCommand> {
        std::mem::take(&mut *self.commands.lock())
    }
}

impl MapRenderer for RecordingRenderer {
    fn render(&mut self, command: &RenderCommand) {
        self.commands.lock().push(command.clone());
    }
}

/// Renderer that writes commands to the log and keeps nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogRenderer;

impl MapRenderer for LogRenderer {
    fn render(&mut self, command: &RenderCommand) {
        log::debug!("{command:?}");
    }
}
