use crate::command::{Category, Command, CommandDescriptor, CommandMetadata, CommandOutput, Effect, Execution};
use crate::context::CommandContext;
use crate::error::LoadError;

/// mode
/// Flips INSERT/NORMAL. Prints nothing.
pub struct ModeCommand;

pub fn metadata() -> CommandMetadata {
    CommandMetadata::new(
        "mode",
        "Toggle vim mode (INSERT/NORMAL) - hjkl to scroll in NORMAL, i to INSERT",
        "mode",
        Category::Core,
    )
    .with_aliases(&["vim", "m"])
}

pub fn load() -> Result<CommandDescriptor, LoadError> {
    Ok(CommandDescriptor::new(metadata(), ModeCommand))
}

impl Command for ModeCommand {
    fn execute(&self, _args: &[String], _ctx: &CommandContext<'_>) -> Execution {
        Execution::ok(CommandOutput::default().with_effect(Effect::ToggleMode))
    }
}
