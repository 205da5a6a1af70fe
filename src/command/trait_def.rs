// Command trait definition

use crate::command::light::{DeviceError, Light};

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur during command execution or undo
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The receiver refused the operation
    #[error(transparent)]
    Device(#[from] DeviceError),

    /// Undo was requested on a command that never ran
    #[error("command has not been executed, nothing to undo")]
    NotExecuted,
}

/// Trait for reversible operations on a light
///
/// The light is handed in at call time, so a command never owns the
/// receiver and any number of commands can act on the same light.
///
/// # Example
/// ```
/// use patterns_lab::command::{Command, CommandError, CommandResult, Light};
///
/// #[derive(Default)]
/// struct Flash {
///     prev: Option<bool>,
/// }
///
/// impl Command for Flash {
///     fn execute(&mut self, light: &mut Light) -> CommandResult<()> {
///         let prev = light.is_on();
///         light.switch_on()?;
///         self.prev = Some(prev);
///         Ok(())
///     }
///
///     fn undo(&mut self, light: &mut Light) -> CommandResult<()> {
///         let prev = self.prev.ok_or(CommandError::NotExecuted)?;
///         light.set_on(prev)?;
///         Ok(())
///     }
///
///     fn label(&self) -> String {
///         "Flash".to_string()
///     }
/// }
/// ```
pub trait Command {
    /// Execute the command
    ///
    /// Must capture whatever prior state undo() needs before mutating the
    /// light. A failed execution must leave the light untouched.
    fn execute(&mut self, light: &mut Light) -> CommandResult<()>;

    /// Undo the command
    ///
    /// Restores the light to the exact state execute() observed.
    fn undo(&mut self, light: &mut Light) -> CommandResult<()>;

    /// Human-readable label, used for history display
    fn label(&self) -> String;
}
