//! The terminal session: scrollback, input line, history, modal input and the
//! submit protocol. Pure state; anything the browser has to do is queued as a
//! `HostAction` for the host to drain.

use crate::command::{CommandOutput, CommandRegistry, Dispatch, Effect};
use crate::config::TerminalConfig;
use crate::context::CommandContext;
use crate::error::LoadError;
use crate::history::InputHistory;
use crate::markup::{self, Segment};
use crate::routes;
use crate::theme::Theme;
use futures::future::LocalBoxFuture;
use serde::Serialize;
use std::collections::VecDeque;

pub const STATUS_LOADING: &str = "Loading...";
pub const STATUS_READY: &str = "Ready";
pub const STATUS_PROCESSING: &str = "Processing...";
pub const STATUS_LOAD_FAILED: &str = "Error loading commands";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InputMode {
    Insert,
    Normal,
}

/// A failed load leaves the session in `Loading`; only the status line and
/// scrollback tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadyState {
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Command,
    Output,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrollbackEntry {
    pub kind: EntryKind,
    pub text: String,
}

impl ScrollbackEntry {
    pub fn command(text: impl Into<String>) -> Self {
        Self { kind: EntryKind::Command, text: text.into() }
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self { kind: EntryKind::Output, text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Tab,
    ArrowUp,
    ArrowDown,
    F11,
    Backspace,
    Char(char),
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Key {
        match key {
            "Enter" => Key::Enter,
            "Tab" => Key::Tab,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "F11" => Key::F11,
            "Backspace" => Key::Backspace,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other,
                }
            }
        }
    }
}

/// Viewport panning in NORMAL mode (h, j, k, l).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Left,
    Down,
    Up,
    Right,
}

/// Work for the host environment, in the order it was queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostAction {
    /// Push a path onto the browser history.
    PushPath(String),
    /// Call `Session::apply(effect)` after `delay_ms`.
    Defer { effect: Effect, delay_ms: u32 },
    /// Call `Session::settle_status` after `delay_ms`.
    ResetStatus { delay_ms: u32 },
    Scroll(ScrollDirection),
    FocusInput,
    BlurInput,
    PersistTheme(Theme),
    FullscreenChanged(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    /// Typed, or clicked in the output.
    Submit,
    /// First render after load, from the current path.
    Seed,
    /// Browser back/forward.
    Navigate,
    /// `mode` and its aliases.
    Silent,
}

/// A command that was dispatched and is being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
    origin: Origin,
    /// Screen the output belongs to.
    generation: u64,
}

/// Output of an asynchronous command that has not resolved yet. Await it with
/// `finish` (without holding the session) and hand the result to
/// `Session::complete`. If another command redrew the screen in the meantime
/// the result is dropped.
pub struct PendingCommand {
    pub invocation: Invocation,
    output: LocalBoxFuture<'static, CommandOutput>,
}

impl PendingCommand {
    pub async fn finish(self) -> (Invocation, CommandOutput) {
        let output = self.output.await;
        (self.invocation, output)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryView {
    pub kind: EntryKind,
    pub text: String,
    pub segments: Vec<Segment>,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct TerminalView {
    pub prompt: String,
    pub version: String,
    pub entries: Vec<EntryView>,
    pub input: String,
    pub cursor: usize,
    pub mode: InputMode,
    pub status: String,
    pub theme: Theme,
    pub fullscreen: bool,
    pub ready: ReadyState,
}

pub struct Session {
    config: TerminalConfig,
    registry: CommandRegistry,
    scrollback: VecDeque<ScrollbackEntry>,
    input: String,
    cursor: usize,
    history: InputHistory,
    mode: InputMode,
    ready: ReadyState,
    status: String,
    fullscreen: bool,
    theme: Theme,
    actions: Vec<HostAction>,
    // bumped whenever a command takes over the screen
    generation: u64,
}

impl Session {
    pub fn new(config: TerminalConfig, theme: Theme) -> Self {
        let history = InputHistory::new(config.history_limit);
        Self {
            config,
            registry: CommandRegistry::new(),
            scrollback: VecDeque::new(),
            input: String::new(),
            cursor: 0,
            history,
            mode: InputMode::Insert,
            ready: ReadyState::Loading,
            status: STATUS_LOADING.to_string(),
            fullscreen: false,
            theme,
            actions: Vec::new(),
            generation: 0,
        }
    }

    // -- load / routing --

    /// Takes the outcome of the registry load. On success the session becomes
    /// ready and `path` picks the command that seeds the scrollback; the
    /// address bar is left as is. Only the first successful load seeds, later
    /// ones are ignored.
    pub fn registry_loaded(
        &mut self,
        result: Result<CommandRegistry, LoadError>,
        path: &str,
    ) -> Option<PendingCommand> {
        if self.ready == ReadyState::Ready {
            log::warn!("commands already loaded, ignoring reload");
            return None;
        }
        match result {
            Ok(registry) => {
                self.registry = registry;
                self.ready = ReadyState::Ready;
                self.status = STATUS_READY.to_string();
                let seed = routes::route_for_path(path);
                log::info!("terminal ready, seeding with '{}' for path {}", seed, path);
                self.run(seed, Origin::Seed)
            }
            Err(e) => {
                log::error!("failed to load commands: {}", e);
                self.status = STATUS_LOAD_FAILED.to_string();
                self.push_entry(ScrollbackEntry::output(format!(
                    "Error: Failed to initialize command system. {}",
                    e
                )));
                None
            }
        }
    }

    /// Browser back/forward: re-run whatever the new path maps to.
    pub fn navigate(&mut self, path: &str) -> Option<PendingCommand> {
        let command = routes::route_for_path(path);
        log::debug!("history navigation to {} -> {}", path, command);
        self.run(command, Origin::Navigate)
    }

    // -- input --

    pub fn key_down(&mut self, key: Key, alt: bool) -> Option<PendingCommand> {
        if key == Key::F11 || (alt && key == Key::Enter) {
            self.toggle_fullscreen();
            return None;
        }

        match self.mode {
            InputMode::Normal => {
                self.normal_key(key);
                None
            }
            InputMode::Insert => self.insert_key(key),
        }
    }

    fn normal_key(&mut self, key: Key) {
        let direction = match key {
            Key::Char('i') => {
                self.set_mode(InputMode::Insert);
                return;
            }
            Key::Char('h') => ScrollDirection::Left,
            Key::Char('j') => ScrollDirection::Down,
            Key::Char('k') => ScrollDirection::Up,
            Key::Char('l') => ScrollDirection::Right,
            _ => return,
        };
        self.actions.push(HostAction::Scroll(direction));
    }

    fn insert_key(&mut self, key: Key) -> Option<PendingCommand> {
        match key {
            Key::Enter => return self.submit(),
            Key::Tab => self.complete_input(),
            Key::ArrowUp => {
                if let Some(line) = self.history.previous().map(str::to_string) {
                    self.replace_input(line);
                }
            }
            Key::ArrowDown => {
                if let Some(line) = self.history.next().map(str::to_string) {
                    self.replace_input(line);
                }
            }
            Key::Backspace => {
                self.history.reset_cursor();
                self.input.pop();
                self.cursor = self.input.chars().count();
            }
            Key::Char(c) => {
                self.history.reset_cursor();
                self.input.push(c);
                self.cursor = self.input.chars().count();
            }
            Key::Other => self.history.reset_cursor(),
            Key::F11 => {}
        }
        None
    }

    /// The text control's own change event.
    pub fn set_input(&mut self, value: &str) {
        self.history.reset_cursor();
        self.replace_input(value.to_string());
    }

    // cursor counts characters, the page positions it per glyph
    fn replace_input(&mut self, value: String) {
        self.cursor = value.chars().count();
        self.input = value;
    }

    /// Clicking the input always lands in INSERT.
    pub fn click_input(&mut self) {
        self.set_mode(InputMode::Insert);
    }

    pub fn submit(&mut self) -> Option<PendingCommand> {
        let line = self.input.clone();
        self.submit_line(&line)
    }

    /// Runs a `<cmd>` token (or other clickable name) from the output.
    pub fn click_command(&mut self, name: &str) -> Option<PendingCommand> {
        self.submit_line(name)
    }

    fn submit_line(&mut self, line: &str) -> Option<PendingCommand> {
        let name = line.split_whitespace().next().unwrap_or("").to_lowercase();
        let origin = if routes::is_mode(&name) {
            Origin::Silent
        } else {
            Origin::Submit
        };
        self.run(line, origin)
    }

    /// Tab: one match completes, several are listed, none does nothing.
    fn complete_input(&mut self) {
        let prefix = self.input.to_lowercase();
        let matches: Vec<String> = self
            .registry
            .names()
            .into_iter()
            .filter(|name| name.to_lowercase().starts_with(&prefix))
            .collect();

        match matches.len() {
            0 => {}
            1 => {
                self.history.reset_cursor();
                let only = matches.into_iter().next().unwrap_or_default();
                self.replace_input(only);
            }
            _ => {
                self.push_entry(ScrollbackEntry::output(self.input.clone()));
                self.push_entry(ScrollbackEntry::output(format!(
                    "Possible completions: {}",
                    matches.join(", ")
                )));
            }
        }
    }

    // -- dispatch --

    fn run(&mut self, line: &str, origin: Origin) -> Option<PendingCommand> {
        if self.ready != ReadyState::Ready {
            log::debug!("ignoring '{}': commands not ready", line.trim());
            return None;
        }

        let trimmed = line.trim();
        let mut parts = trimmed.split_whitespace();
        let name = match parts.next() {
            Some(n) => n.to_lowercase(),
            None => return None,
        };
        let args: Vec<String> = parts.map(|s| s.to_string()).collect();

        let dispatch_name = if origin == Origin::Silent { "mode" } else { name.as_str() };
        if origin != Origin::Silent {
            self.generation += 1;
        }

        match origin {
            Origin::Submit => {
                self.history.push(trimmed);
                self.scrollback.clear();
                self.push_entry(ScrollbackEntry::command(trimmed));
            }
            Origin::Navigate => {
                self.history.reset_cursor();
                self.scrollback.clear();
                self.push_entry(ScrollbackEntry::command(trimmed));
            }
            Origin::Silent => self.history.reset_cursor(),
            Origin::Seed => {}
        }

        if matches!(origin, Origin::Submit | Origin::Silent) {
            self.input.clear();
            self.cursor = 0;
        }
        if matches!(origin, Origin::Submit | Origin::Navigate) {
            self.status = STATUS_PROCESSING.to_string();
            self.actions.push(HostAction::ResetStatus {
                delay_ms: self.config.status_reset_ms,
            });
        }

        let ctx = CommandContext::new(&self.registry, self.theme).with_fullscreen(self.fullscreen);
        let dispatch = self.registry.execute(dispatch_name, &args, &ctx);
        let invocation = Invocation {
            name,
            origin,
            generation: self.generation,
        };

        match dispatch {
            Dispatch::Ready(output) => {
                self.complete(invocation, output);
                None
            }
            Dispatch::Pending(output) => Some(PendingCommand { invocation, output }),
        }
    }

    /// Renders a command's output into the scrollback and queues whatever the
    /// host has to do about it.
    pub fn complete(&mut self, invocation: Invocation, output: CommandOutput) {
        let Invocation { name, origin, generation } = invocation;

        if origin != Origin::Silent && generation != self.generation {
            log::debug!("dropping stale output of '{}'", name);
            return;
        }

        if origin == Origin::Silent {
            if let Some(effect) = output.effect {
                self.apply(effect);
            }
            return;
        }

        if output.is_clear_screen() {
            self.scrollback.clear();
        } else {
            if !output.text.is_empty() {
                self.push_entry(ScrollbackEntry::output(""));
                for line in output.text.split('\n') {
                    self.push_entry(ScrollbackEntry::output(line));
                }
                self.push_entry(ScrollbackEntry::output(""));
            }
            if origin != Origin::Seed && !routes::is_banner(&name) && name != "help" {
                self.push_entry(ScrollbackEntry::output(""));
                self.push_entry(ScrollbackEntry::output(self.config.footer_line()));
            }
        }

        if origin == Origin::Submit {
            if let Some(path) = routes::path_for_command(&name) {
                self.actions.push(HostAction::PushPath(path));
            }
        }

        match output.effect {
            Some(Effect::ToggleMode) => self.apply(Effect::ToggleMode),
            Some(effect) => self.actions.push(HostAction::Defer {
                effect,
                delay_ms: self.config.effect_delay_ms,
            }),
            None => {}
        }
    }

    /// Applies an effect now. The host calls this when a deferred effect fires.
    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::ToggleFullscreen => self.toggle_fullscreen(),
            Effect::ToggleTheme => self.toggle_theme(),
            Effect::ToggleMode => self.toggle_mode(),
        }
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        self.actions.push(HostAction::FullscreenChanged(self.fullscreen));
        self.actions.push(HostAction::FocusInput);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        log::debug!("theme is now {}", self.theme);
        self.actions.push(HostAction::PersistTheme(self.theme));
    }

    pub fn toggle_mode(&mut self) {
        let next = match self.mode {
            InputMode::Insert => InputMode::Normal,
            InputMode::Normal => InputMode::Insert,
        };
        self.set_mode(next);
    }

    fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.actions.push(match mode {
            InputMode::Insert => HostAction::FocusInput,
            InputMode::Normal => HostAction::BlurInput,
        });
    }

    /// End of the "Processing..." window.
    pub fn settle_status(&mut self) {
        if self.status == STATUS_PROCESSING {
            self.status = STATUS_READY.to_string();
        }
    }

    fn push_entry(&mut self, entry: ScrollbackEntry) {
        self.scrollback.push_back(entry);
        while self.scrollback.len() > self.config.max_scrollback {
            self.scrollback.pop_front();
        }
    }

    pub fn take_actions(&mut self) -> Vec<HostAction> {
        std::mem::take(&mut self.actions)
    }

    // -- accessors --

    pub fn scrollback(&self) -> Vec<ScrollbackEntry> {
        self.scrollback.iter().cloned().collect()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn history(&self) -> &InputHistory {
        &self.history
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready
    }

    pub fn is_ready(&self) -> bool {
        self.ready == ReadyState::Ready
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    pub fn view(&self) -> TerminalView {
        let names = self.registry.names();
        let entries = self
            .scrollback
            .iter()
            .map(|entry| EntryView {
                kind: entry.kind,
                text: entry.text.clone(),
                segments: match entry.kind {
                    EntryKind::Command => vec![Segment::Text { text: entry.text.clone() }],
                    EntryKind::Output => markup::linkify(&entry.text, &names),
                },
            })
            .collect();

        TerminalView {
            prompt: self.config.prompt.clone(),
            version: self.config.version.clone(),
            entries,
            input: self.input.clone(),
            cursor: self.cursor,
            mode: self.mode,
            status: self.status.clone(),
            theme: self.theme,
            fullscreen: self.fullscreen,
            ready: self.ready,
        }
    }
}
