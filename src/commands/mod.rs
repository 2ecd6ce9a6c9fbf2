//! Built-in commands, one module each.

pub mod about;
pub mod banner;
pub mod clear;
pub mod contact;
pub mod fullscreen;
pub mod help;
pub mod mode;
pub mod projects;
pub mod sitemap;
pub mod skills;
pub mod theme;

use crate::command::ModuleLoader;

/// Load order: commands that don't touch the registry first, content next,
/// `help` last so its listing is complete from the start.
pub const BUILTIN_MODULES: &[ModuleLoader] = &[
    ("banner", banner::load),
    ("clear", clear::load),
    ("fullscreen", fullscreen::load),
    ("theme", theme::load),
    ("sitemap", sitemap::load),
    ("mode", mode::load),
    ("about", about::load),
    ("skills", skills::load),
    ("projects", projects::load),
    ("contact", contact::load),
    ("help", help::load),
];

#[cfg(test)]
pub(crate) fn run_builtin(
    registry: &crate::command::CommandRegistry,
    command: &dyn crate::command::Command,
    args: &[&str],
) -> crate::command::CommandOutput {
    use crate::command::Execution;

    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    let ctx = crate::context::CommandContext::new(registry, crate::theme::Theme::Dark);
    match command.execute(&args, &ctx) {
        Execution::Done(result) => result.expect("built-in command failed"),
        Execution::Deferred(fut) => futures::executor::block_on(fut).expect("built-in command failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandOutput, CommandRegistry, Effect};
    use crate::context::CommandContext;
    use crate::theme::Theme;
    use futures::executor::block_on;

    fn loaded() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        block_on(registry.load()).unwrap();
        registry
    }

    fn dispatch(registry: &CommandRegistry, name: &str) -> CommandOutput {
        let ctx = CommandContext::new(registry, Theme::Dark);
        block_on(registry.execute(name, &[], &ctx).resolve())
    }

    #[test]
    fn every_module_registers_under_its_own_name() {
        for (name, loader) in BUILTIN_MODULES {
            let descriptor = loader().unwrap();
            let meta = descriptor.metadata.expect("built-ins carry metadata");
            assert_eq!(meta.name, *name);
        }
    }

    #[test]
    fn every_builtin_returns_text_without_args() {
        let registry = loaded();
        for name in registry.names() {
            let out = dispatch(&registry, &name);
            assert!(!out.text.contains("Error executing command"), "{} failed", name);
            if name != "mode" {
                assert!(!out.text.is_empty(), "{} printed nothing", name);
            }
        }
    }

    #[test]
    fn side_effecting_commands_request_effects() {
        let registry = loaded();
        assert_eq!(dispatch(&registry, "fullscreen").effect, Some(Effect::ToggleFullscreen));
        assert_eq!(dispatch(&registry, "theme").effect, Some(Effect::ToggleTheme));
        assert_eq!(dispatch(&registry, "mode").effect, Some(Effect::ToggleMode));
        assert_eq!(dispatch(&registry, "about").effect, None);
    }

    #[test]
    fn clear_returns_the_sentinel() {
        let registry = loaded();
        assert!(dispatch(&registry, "clear").is_clear_screen());
    }
}
