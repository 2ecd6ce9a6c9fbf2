use crate::command::{Category, Command, CommandDescriptor, CommandMetadata, Execution};
use crate::context::CommandContext;
use crate::error::LoadError;

pub struct SitemapCommand;

const SITEMAP: &str = "Site Structure & Commands

Core Navigation:
├── <cmd>about</cmd>      Learn about me and my background
├── <cmd>skills</cmd>     Technical skills and expertise
├── <cmd>projects</cmd>   Recent work and projects
└── <cmd>contact</cmd>    Get in touch

Terminal Commands:
├── <cmd>help</cmd>       Show all available commands
├── <cmd>sitemap</cmd>    Show this site structure (you are here)
├── <cmd>clear</cmd>      Clear the terminal screen
├── <cmd>theme</cmd>      Toggle dark/light theme
├── <cmd>fullscreen</cmd> Enter/exit fullscreen mode
└── <cmd>mode</cmd>       Toggle vim-style INSERT/NORMAL input

Navigation Tips:
• Click any <cmd>command</cmd> name to execute it
• Type commands manually for the full experience
• Use 'help' to see detailed command descriptions

Site Map:
nate.green/
├── Terminal Interface
├── About Section        /about
├── Skills Overview      /skills
├── Project Portfolio    /projects
└── Contact Information  /contact";

pub fn metadata() -> CommandMetadata {
    CommandMetadata::new(
        "sitemap",
        "Show site structure and available commands",
        "sitemap",
        Category::Core,
    )
    .with_aliases(&["map", "structure"])
}

pub fn load() -> Result<CommandDescriptor, LoadError> {
    Ok(CommandDescriptor::new(metadata(), SitemapCommand))
}

impl Command for SitemapCommand {
    fn execute(&self, _args: &[String], _ctx: &CommandContext<'_>) -> Execution {
        Execution::ok(SITEMAP)
    }
}
