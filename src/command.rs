use crate::context::CommandContext;
use crate::error::{CommandError, LoadError};
use futures::future::{self, FutureExt, LocalBoxFuture};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Text returned by `clear`. The session empties the scrollback when it sees it.
pub const CLEAR_SCREEN: &str = "__CLEAR_SCREEN__";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Core,
    Content,
    System,
    Utility,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Core => "core",
            Category::Content => "content",
            Category::System => "system",
            Category::Utility => "utility",
        }
    }

    /// Heading used by `help` when grouping.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Core => "Core",
            Category::Content => "Content",
            Category::System => "System",
            Category::Utility => "Utility",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What `help` shows about a command. Aliases are display-only, the registry
/// is keyed by `name` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandMetadata {
    pub name: String,
    pub description: String,
    pub usage: String,
    pub category: Category,
    pub aliases: Vec<String>,
}

impl CommandMetadata {
    pub fn new(name: &str, description: &str, usage: &str, category: Category) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            usage: usage.to_string(),
            category,
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }
}

/// Side effect a handler asks for. The session applies it, never the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    ToggleFullscreen,
    ToggleTheme,
    ToggleMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub effect: Option<Effect>,
}

impl CommandOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), effect: None }
    }

    pub fn clear_screen() -> Self {
        Self::text(CLEAR_SCREEN)
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn is_clear_screen(&self) -> bool {
        self.text == CLEAR_SCREEN
    }
}

impl From<String> for CommandOutput {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl From<&str> for CommandOutput {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

pub type CommandResult = Result<CommandOutput, CommandError>;

/// A handler either answers right away or hands back a future.
pub enum Execution {
    Done(CommandResult),
    Deferred(LocalBoxFuture<'static, CommandResult>),
}

impl Execution {
    pub fn ok(output: impl Into<CommandOutput>) -> Self {
        Execution::Done(Ok(output.into()))
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Execution::Done(Err(CommandError::new(message)))
    }
}

impl From<CommandResult> for Execution {
    fn from(result: CommandResult) -> Self {
        Execution::Done(result)
    }
}

pub trait Command {
    fn execute(&self, args: &[String], ctx: &CommandContext<'_>) -> Execution;
}

/// Metadata plus handler. `metadata` is optional so a half-built descriptor
/// can still be registered and run; grouped views just leave it out.
#[derive(Clone)]
pub struct CommandDescriptor {
    pub metadata: Option<CommandMetadata>,
    handler: Rc<dyn Command>,
}

impl CommandDescriptor {
    pub fn new(metadata: CommandMetadata, handler: impl Command + 'static) -> Self {
        Self {
            metadata: Some(metadata),
            handler: Rc::new(handler),
        }
    }

    pub fn without_metadata(handler: impl Command + 'static) -> Self {
        Self {
            metadata: None,
            handler: Rc::new(handler),
        }
    }

    pub fn category(&self) -> Option<Category> {
        self.metadata.as_ref().map(|m| m.category)
    }

    pub fn execute(&self, args: &[String], ctx: &CommandContext<'_>) -> Execution {
        self.handler.execute(args, ctx)
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

/// Result of a registry dispatch. Failures are already folded into text.
pub enum Dispatch {
    Ready(CommandOutput),
    Pending(LocalBoxFuture<'static, CommandOutput>),
}

impl Dispatch {
    pub async fn resolve(self) -> CommandOutput {
        match self {
            Dispatch::Ready(output) => output,
            Dispatch::Pending(fut) => fut.await,
        }
    }
}

/// A named constructor for one built-in command, resolved during `load`.
pub type ModuleLoader = (&'static str, fn() -> Result<CommandDescriptor, LoadError>);

#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, CommandDescriptor>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self { commands: BTreeMap::new() }
    }

    /// Inserts or overwrites.
    pub fn register(&mut self, name: &str, descriptor: CommandDescriptor) {
        self.commands.insert(name.to_string(), descriptor);
    }

    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.get(name)
    }

    /// Snapshot copy; changing it leaves the registry alone.
    pub fn all(&self) -> BTreeMap<String, CommandDescriptor> {
        self.commands.clone()
    }

    pub fn by_category(&self, category: Category) -> BTreeMap<String, CommandDescriptor> {
        self.commands
            .iter()
            .filter(|(_, cmd)| cmd.category() == Some(category))
            .map(|(name, cmd)| (name.clone(), cmd.clone()))
            .collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Looks up `name` and runs it. Unknown names and handler errors come back
    /// as ordinary output.
    pub fn execute(&self, name: &str, args: &[String], ctx: &CommandContext<'_>) -> Dispatch {
        let command = match self.get(name) {
            Some(c) => c,
            None => return Dispatch::Ready(CommandOutput::text(format!("Command not found: {}", name))),
        };

        match command.execute(args, ctx) {
            Execution::Done(result) => Dispatch::Ready(settle(name, result)),
            Execution::Deferred(fut) => {
                let name = name.to_string();
                Dispatch::Pending(async move { settle(&name, fut.await) }.boxed_local())
            }
        }
    }

    /// Populates the registry with the built-in command set.
    pub async fn load(&mut self) -> Result<usize, LoadError> {
        self.load_from(crate::commands::BUILTIN_MODULES).await
    }

    /// Resolves each module in order and registers it under its name. Stops at
    /// the first module that fails.
    pub async fn load_from(&mut self, modules: &[ModuleLoader]) -> Result<usize, LoadError> {
        for (name, loader) in modules {
            match future::lazy(|_| loader()).await {
                Ok(descriptor) => self.register(name, descriptor),
                Err(e) => {
                    log::error!("error loading commands: {}", e);
                    return Err(e);
                }
            }
        }
        log::info!("commands loaded successfully ({} registered)", self.len());
        Ok(self.len())
    }
}

fn settle(name: &str, result: CommandResult) -> CommandOutput {
    match result {
        Ok(output) => output,
        Err(e) => {
            log::warn!("error executing command {}: {}", name, e);
            CommandOutput::text(format!("Error executing command: {}", e))
        }
    }
}
