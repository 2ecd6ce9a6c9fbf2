use crate::command::{Category, Command, CommandDescriptor, CommandMetadata, Execution};
use crate::context::CommandContext;
use crate::error::LoadError;

/// banner
/// Welcome screen with the rainbow ASCII logo.
pub struct BannerCommand;

const ASCII_ART: &str = r"_   _       _         _____
| \ | |     | |       / ____|
|  \| | __ _| |_ ___ | |  __ _ __ ___  ___ _ __
| . ` |/ _` | __/ _ \| | |_ | '__/ _ \/ _ \ '_ \
| |\  | (_| | ||  __/| |__| | | |  __/  __/ | | |
|_| \_|\__,_|\__\___| \_____|_|  \___|\__|_| |_|";

pub fn metadata() -> CommandMetadata {
    CommandMetadata::new("banner", "Display welcome banner", "banner", Category::Core)
        .with_aliases(&["welcome", "intro", "home", "h"])
}

pub fn load() -> Result<CommandDescriptor, LoadError> {
    Ok(CommandDescriptor::new(metadata(), BannerCommand))
}

// every visible glyph gets its own span so the css animation can stagger them
fn rainbow(art: &str) -> String {
    art.chars()
        .enumerate()
        .map(|(i, ch)| match ch {
            ' ' | '\n' => ch.to_string(),
            _ => format!(
                "<span class=\"rainbow-char\" style=\"animation-delay: {:.1}s\">{}</span>",
                i as f64 * 0.1,
                ch
            ),
        })
        .collect()
}

impl Command for BannerCommand {
    fn execute(&self, _args: &[String], _ctx: &CommandContext<'_>) -> Execution {
        Execution::ok(format!(
            "\n{}\n\nWelcome to the nate.green interactive terminal [Version {}]\n\n\
             Available ng-cli commands:\n\
             <cmd>about</cmd> - Who dis?\n\
             <cmd>contact</cmd> - Get in touch\n\
             <cmd>projects</cmd> - Open source stuff\n\
             <cmd>skills</cmd> - List my technical skills\n\n\
             Type '<cmd>help</cmd>' for all commands.",
            rainbow(ASCII_ART),
            env!("CARGO_PKG_VERSION")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandRegistry;
    use crate::commands::run_builtin;
    use crate::markup;

    #[test]
    fn has_the_expected_metadata() {
        let meta = metadata();
        assert_eq!(meta.name, "banner");
        assert_eq!(meta.category, Category::Core);
        assert_eq!(meta.aliases, vec!["welcome", "intro", "home", "h"]);
    }

    #[test]
    fn prints_welcome_and_navigation_hints() {
        let out = run_builtin(&CommandRegistry::new(), &BannerCommand, &[]);
        assert!(out.text.contains("nate.green interactive terminal"));
        assert!(out.text.contains(env!("CARGO_PKG_VERSION")));
        assert!(out.text.contains("Type '<cmd>help</cmd>'"));
        assert!(out.effect.is_none());
    }

    #[test]
    fn rainbow_keeps_the_art_readable() {
        let art = rainbow("a b\nc");
        assert!(art.contains("animation-delay: 0.0s\">a</span>"));
        assert!(art.contains("animation-delay: 0.2s\">b</span>"));
        assert_eq!(markup::strip(&art), "a b\nc");
    }
}
