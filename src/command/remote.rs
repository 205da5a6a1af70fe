// RemoteControl - executes commands and keeps the undo/redo history

use crate::command::light::Light;
use crate::command::trait_def::{Command, CommandResult};
use std::collections::VecDeque;

/// Default maximum number of commands to keep in history
const DEFAULT_MAX_HISTORY: usize = 100;

/// Outcome of pressing the undo button
///
/// An empty history is a routine condition, not a failure, so it is a
/// variant rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The most recent command was inverted; carries its label
    Undone(String),
    /// Nothing left to undo, the light was not touched
    NothingToUndo,
}

/// Outcome of pressing the redo button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedoOutcome {
    /// The most recently undone command ran again; carries its label
    Redone(String),
    /// Nothing left to redo
    NothingToRedo,
}

/// The invoker: runs commands against a light and records them
///
/// Two stacks, most recent at the back:
/// - history: executed commands that can be undone
/// - redo stack: undone commands that can be replayed
///
/// The history holds only commands that executed successfully, and it is
/// bounded: past `max_history` entries the oldest command is evicted.
pub struct RemoteControl {
    history: VecDeque<Box<dyn Command>>,
    redo_stack: VecDeque<Box<dyn Command>>,
    max_history: usize,
}

impl RemoteControl {
    /// Create a remote with the default history limit
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_HISTORY)
    }

    /// Create a remote with a custom history limit
    pub fn with_capacity(max_history: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(max_history),
            redo_stack: VecDeque::with_capacity(max_history),
            max_history,
        }
    }

    /// Execute a command and record it
    ///
    /// A command that fails to execute is not recorded and leaves the
    /// redo stack untouched.
    ///
    /// # Errors
    /// Propagates the command's execution error.
    pub fn set_command(
        &mut self,
        mut command: Box<dyn Command>,
        light: &mut Light,
    ) -> CommandResult<()> {
        command.execute(light)?;

        self.history.push_back(command);

        // A new command starts a new timeline
        self.redo_stack.clear();

        if self.history.len() > self.max_history {
            self.history.pop_front();
        }

        Ok(())
    }

    /// Undo the most recently executed command
    ///
    /// Pops the newest history entry, inverts it and moves it to the redo
    /// stack. An empty history yields `UndoOutcome::NothingToUndo`.
    ///
    /// # Errors
    /// Propagates the command's undo error; the command stays in the
    /// history so the undo can be retried.
    pub fn press_undo(&mut self, light: &mut Light) -> CommandResult<UndoOutcome> {
        let Some(mut command) = self.history.pop_back() else {
            return Ok(UndoOutcome::NothingToUndo);
        };

        let label = command.label();

        if let Err(err) = command.undo(light) {
            self.history.push_back(command);
            return Err(err);
        }

        self.redo_stack.push_back(command);
        Ok(UndoOutcome::Undone(label))
    }

    /// Replay the most recently undone command
    ///
    /// # Errors
    /// Propagates the command's execution error; the command stays on the
    /// redo stack so the redo can be retried.
    pub fn press_redo(&mut self, light: &mut Light) -> CommandResult<RedoOutcome> {
        let Some(mut command) = self.redo_stack.pop_back() else {
            return Ok(RedoOutcome::NothingToRedo);
        };

        let label = command.label();

        if let Err(err) = command.execute(light) {
            self.redo_stack.push_back(command);
            return Err(err);
        }

        self.history.push_back(command);
        Ok(RedoOutcome::Redone(label))
    }

    /// Check if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Check if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of commands in the undo history
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Number of commands on the redo stack
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }
}

impl Default for RemoteControl {
    fn default() -> Self {
        Self::new()
    }
}
