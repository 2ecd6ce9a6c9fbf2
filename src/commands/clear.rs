use crate::command::{Category, Command, CommandDescriptor, CommandMetadata, CommandOutput, Execution};
use crate::context::CommandContext;
use crate::error::LoadError;

pub struct ClearCommand;

pub fn metadata() -> CommandMetadata {
    CommandMetadata::new("clear", "Clear the console", "clear", Category::Core).with_aliases(&["cls"])
}

pub fn load() -> Result<CommandDescriptor, LoadError> {
    Ok(CommandDescriptor::new(metadata(), ClearCommand))
}

impl Command for ClearCommand {
    fn execute(&self, _args: &[String], _ctx: &CommandContext<'_>) -> Execution {
        Execution::ok(CommandOutput::clear_screen())
    }
}
