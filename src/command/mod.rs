// Command Pattern - smart-home remote with undo/redo
//
// All light operations go through the Command trait so the remote can
// record them and walk them back.
//
// Architecture:
// - Command trait: defines execute(), undo(), label()
// - RemoteControl: executes commands and keeps the undo/redo history
// - Concrete commands: LightOnCommand, LightOffCommand

pub mod commands;
pub mod light;
pub mod remote;
pub mod trait_def;

pub use commands::{LightOffCommand, LightOnCommand};
pub use light::{DeviceError, Light, SwitchReport};
pub use remote::{RedoOutcome, RemoteControl, UndoOutcome};
pub use trait_def::{Command, CommandError, CommandResult};
