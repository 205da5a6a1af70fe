// Concrete light commands

use crate::command::light::Light;
use crate::command::trait_def::{Command, CommandError, CommandResult};

/// Command that turns the light on
///
/// Captures the light's prior state on execute, so undo restores exactly
/// what was there before, even if the light was already on.
#[derive(Debug, Default)]
pub struct LightOnCommand {
    prev: Option<bool>,
}

impl LightOnCommand {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Command for LightOnCommand {
    fn execute(&mut self, light: &mut Light) -> CommandResult<()> {
        let prev = light.is_on();
        light.switch_on()?;
        self.prev = Some(prev);
        Ok(())
    }

    fn undo(&mut self, light: &mut Light) -> CommandResult<()> {
        let prev = self.prev.ok_or(CommandError::NotExecuted)?;
        light.set_on(prev)?;
        Ok(())
    }

    fn label(&self) -> String {
        "Turn light on".to_string()
    }
}

/// Command that turns the light off
#[derive(Debug, Default)]
pub struct LightOffCommand {
    prev: Option<bool>,
}

impl LightOffCommand {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Command for LightOffCommand {
    fn execute(&mut self, light: &mut Light) -> CommandResult<()> {
        let prev = light.is_on();
        light.switch_off()?;
        self.prev = Some(prev);
        Ok(())
    }

    fn undo(&mut self, light: &mut Light) -> CommandResult<()> {
        let prev = self.prev.ok_or(CommandError::NotExecuted)?;
        light.set_on(prev)?;
        Ok(())
    }

    fn label(&self) -> String {
        "Turn light off".to_string()
    }
}
