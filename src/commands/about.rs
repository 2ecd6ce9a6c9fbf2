use crate::command::{Category, Command, CommandDescriptor, CommandMetadata, Execution};
use crate::context::CommandContext;
use crate::error::LoadError;

pub struct AboutCommand;

const ABOUT: &str = "
 Hey there. Welcome here. About me: I am software engineer, researcher, musician, and theater maker.
 I'm passionate about digital and analog processes that help humans be better humans together in service to our collective well-being.
";

pub fn metadata() -> CommandMetadata {
    CommandMetadata::new("about", "Display information about me", "about", Category::Content)
        .with_aliases(&["bio", "profile"])
}

pub fn load() -> Result<CommandDescriptor, LoadError> {
    Ok(CommandDescriptor::new(metadata(), AboutCommand))
}

impl Command for AboutCommand {
    fn execute(&self, _args: &[String], _ctx: &CommandContext<'_>) -> Execution {
        Execution::ok(ABOUT)
    }
}
