use crate::command::{Category, Command, CommandDescriptor, CommandMetadata, CommandOutput, Effect, Execution};
use crate::context::CommandContext;
use crate::error::LoadError;

/// theme
/// Announces the theme it is about to switch to; the switch itself is deferred.
pub struct ThemeCommand;

pub fn metadata() -> CommandMetadata {
    CommandMetadata::new("theme", "Toggle between light and dark mode", "theme", Category::Core)
        .with_aliases(&["darkmode", "lightmode"])
}

pub fn load() -> Result<CommandDescriptor, LoadError> {
    Ok(CommandDescriptor::new(metadata(), ThemeCommand))
}

impl Command for ThemeCommand {
    fn execute(&self, _args: &[String], ctx: &CommandContext<'_>) -> Execution {
        let next = ctx.theme.toggled();
        Execution::ok(
            CommandOutput::text(format!("Switching to {} mode...", next)).with_effect(Effect::ToggleTheme),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandRegistry;
    use crate::theme::Theme;

    #[test]
    fn names_the_opposite_theme() {
        let registry = CommandRegistry::new();
        let ctx = CommandContext::new(&registry, Theme::Dark);
        match ThemeCommand.execute(&[], &ctx) {
            Execution::Done(Ok(out)) => {
                assert_eq!(out.text, "Switching to light mode...");
                assert_eq!(out.effect, Some(Effect::ToggleTheme));
            }
            _ => panic!("theme should answer immediately"),
        }
    }
}
