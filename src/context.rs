use crate::command::CommandRegistry;
use crate::theme::Theme;

/// What a handler gets to see while it runs. Handlers read from it but ask for
/// changes through `Effect`s.
pub struct CommandContext<'a> {
    pub theme: Theme,
    pub fullscreen: bool,
    registry: &'a CommandRegistry,
}

impl<'a> CommandContext<'a> {
    pub fn new(registry: &'a CommandRegistry, theme: Theme) -> Self {
        Self {
            theme,
            fullscreen: false,
            registry,
        }
    }

    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    /// The live registry, read at call time (`help` depends on this).
    pub fn registry(&self) -> &'a CommandRegistry {
        self.registry
    }
}
