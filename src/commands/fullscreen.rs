use crate::command::{Category, Command, CommandDescriptor, CommandMetadata, CommandOutput, Effect, Execution};
use crate::context::CommandContext;
use crate::error::LoadError;

/// fullscreen
/// Asks the session to flip fullscreen once the output has been drawn.
pub struct FullscreenCommand;

pub fn metadata() -> CommandMetadata {
    CommandMetadata::new(
        "fullscreen",
        "Toggle fullscreen mode (or press F11)",
        "fullscreen",
        Category::Core,
    )
    .with_aliases(&["fs"])
}

pub fn load() -> Result<CommandDescriptor, LoadError> {
    Ok(CommandDescriptor::new(metadata(), FullscreenCommand))
}

impl Command for FullscreenCommand {
    fn execute(&self, _args: &[String], _ctx: &CommandContext<'_>) -> Execution {
        Execution::ok(CommandOutput::text("Toggling fullscreen mode...").with_effect(Effect::ToggleFullscreen))
    }
}
