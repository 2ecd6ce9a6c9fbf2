use crate::command::{Category, Command, CommandDescriptor, CommandMetadata, Execution};
use crate::context::CommandContext;
use crate::error::LoadError;
use std::collections::BTreeMap;

/// help [COMMAND]
/// Lists every registered command by category, or details one command.
/// Reads the registry on every call, so commands registered later show up.
pub struct HelpCommand;

pub fn metadata() -> CommandMetadata {
    CommandMetadata::new("help", "Display available commands", "help [command]", Category::Core)
        .with_aliases(&["?", "commands"])
}

pub fn load() -> Result<CommandDescriptor, LoadError> {
    Ok(CommandDescriptor::new(metadata(), HelpCommand))
}

impl Command for HelpCommand {
    fn execute(&self, args: &[String], ctx: &CommandContext<'_>) -> Execution {
        let commands = ctx.registry().all();

        // single arg = detail for one command
        if let Some(requested) = args.first() {
            let name = requested.to_lowercase();
            return match commands.get(&name) {
                None => Execution::ok(format!(
                    "Command '{}' not found. Type 'help' for a list of available commands.",
                    name
                )),
                Some(cmd) => match &cmd.metadata {
                    Some(meta) => Execution::ok(command_detail(meta)),
                    None => Execution::ok(format!("No help available for '{}'.", name)),
                },
            };
        }

        // no args = everything, grouped by category
        let mut grouped: BTreeMap<Category, Vec<(&String, &CommandMetadata)>> = BTreeMap::new();
        for (name, cmd) in &commands {
            if let Some(meta) = &cmd.metadata {
                grouped.entry(meta.category).or_default().push((name, meta));
            }
        }

        let mut output = String::from("Available commands:\n");
        for (category, entries) in &grouped {
            output.push_str(&format!("\n{}:\n", category.title()));
            for (name, meta) in entries {
                output.push_str(&format!("<cmd>{}</cmd> - {}\n", name, meta.description));
            }
        }
        output.push_str("\nType '<cmd>help</cmd> [command]' for more information about a specific command.");
        Execution::ok(output)
    }
}

fn command_detail(meta: &CommandMetadata) -> String {
    let aliases = if meta.aliases.is_empty() {
        "None".to_string()
    } else {
        meta.aliases.join(", ")
    };
    format!(
        "\nHelp: {name}\n{rule}\nDescription: {description}\nUsage: {usage}\nCategory: {category}\nAliases: {aliases}\n",
        name = meta.name,
        rule = "=".repeat(meta.name.len() + 6),
        description = meta.description,
        usage = meta.usage,
        category = meta.category,
        aliases = aliases,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandRegistry;
    use crate::commands::{run_builtin, BUILTIN_MODULES};
    use futures::executor::block_on;

    fn loaded() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        block_on(registry.load_from(BUILTIN_MODULES)).unwrap();
        registry
    }

    #[test]
    fn lists_commands_grouped_by_category() {
        let registry = loaded();
        let text = run_builtin(&registry, &HelpCommand, &[]).text;

        let core = text.find("\nCore:\n").unwrap();
        let content = text.find("\nContent:\n").unwrap();
        assert!(core < content);
        assert!(text.contains("<cmd>about</cmd> - Display information about me"));
        assert!(text.contains("<cmd>mode</cmd> - Toggle vim mode"));
        assert!(text.ends_with("for more information about a specific command."));
    }

    #[test]
    fn details_a_single_command() {
        let registry = loaded();
        let text = run_builtin(&registry, &HelpCommand, &["Banner"]).text;

        assert!(text.contains("Help: banner\n============\n"));
        assert!(text.contains("Usage: banner"));
        assert!(text.contains("Category: core"));
        assert!(text.contains("Aliases: welcome, intro, home, h"));
    }

    #[test]
    fn unknown_topic_is_reported() {
        let registry = loaded();
        let text = run_builtin(&registry, &HelpCommand, &["nope"]).text;
        assert!(text.contains("Command 'nope' not found"));
    }

    #[test]
    fn sees_commands_registered_after_it() {
        let mut registry = loaded();
        registry.register(
            "late",
            CommandDescriptor::new(
                CommandMetadata::new("late", "Registered late", "late", Category::Utility),
                HelpCommand,
            ),
        );
        let text = run_builtin(&registry, &HelpCommand, &[]).text;
        assert!(text.contains("\nUtility:\n<cmd>late</cmd> - Registered late\n"));
    }

    #[test]
    fn skips_descriptors_without_metadata() {
        let mut registry = loaded();
        registry.register("bare", CommandDescriptor::without_metadata(HelpCommand));

        let listing = run_builtin(&registry, &HelpCommand, &[]).text;
        assert!(!listing.contains("<cmd>bare</cmd>"));
        let detail = run_builtin(&registry, &HelpCommand, &["bare"]).text;
        assert!(detail.contains("No help available"));
    }
}
