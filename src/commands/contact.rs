use crate::command::{Category, Command, CommandDescriptor, CommandMetadata, Execution};
use crate::context::CommandContext;
use crate::error::LoadError;

pub struct ContactCommand;

const CONTACT: &str = r#"Contact Information:
• Email: <a href="mailto:contact@nate.green" target="_blank" rel="noopener noreferrer">contact@nate.green</a>
• GitHub: <a href="https://github.com/mrilikecoding" target="_blank" rel="noopener noreferrer">github.com/mrilikecoding</a>"#;

pub fn metadata() -> CommandMetadata {
    CommandMetadata::new("contact", "Get in touch", "contact", Category::Content).with_aliases(&["email"])
}

pub fn load() -> Result<CommandDescriptor, LoadError> {
    Ok(CommandDescriptor::new(metadata(), ContactCommand))
}

impl Command for ContactCommand {
    fn execute(&self, _args: &[String], _ctx: &CommandContext<'_>) -> Execution {
        Execution::ok(CONTACT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandRegistry;
    use crate::commands::run_builtin;
    use crate::markup::{self, Segment};

    #[test]
    fn links_are_parseable() {
        let out = run_builtin(&CommandRegistry::new(), &ContactCommand, &[]);
        let links: Vec<Segment> = out
            .text
            .lines()
            .flat_map(markup::segments)
            .filter(|s| matches!(s, Segment::Link { .. }))
            .collect();
        assert_eq!(links.len(), 2);
        assert!(links.contains(&Segment::Link {
            href: "mailto:contact@nate.green".to_string(),
            label: "contact@nate.green".to_string(),
        }));
    }
}
