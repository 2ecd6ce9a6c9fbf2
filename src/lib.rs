// terminal-style portfolio site: command registry + session state machine,
// driven from the page through the `Terminal` binding below
pub mod command;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod history;
pub mod host;
pub mod logging;
pub mod markup;
pub mod routes;
pub mod session;
pub mod storage;
pub mod theme;

pub use command::{
    Category, Command, CommandDescriptor, CommandMetadata, CommandOutput, CommandRegistry,
    Dispatch, Effect, Execution, CLEAR_SCREEN,
};
pub use config::TerminalConfig;
pub use context::CommandContext;
pub use error::{CommandError, HostError, LoadError};
pub use session::{HostAction, InputMode, Key, PendingCommand, ReadyState, Session, TerminalView};
pub use theme::{MemoryThemeStore, Theme, ThemeStore};

use gloo_timers::callback::Timeout;
use log::LevelFilter;
use std::cell::RefCell;
use std::rc::Rc;
use storage::BrowserThemeStore;
use wasm_bindgen::prelude::*;

// state shared between the binding and the timers/futures it spawns
struct Shared {
    session: RefCell<Session>,
    themes: BrowserThemeStore,
    on_render: RefCell<Option<js_sys::Function>>,
}

// the page holds one of these; every call ends with a re-render
#[wasm_bindgen]
pub struct Terminal {
    shared: Rc<Shared>,
}

#[wasm_bindgen]
impl Terminal {
    /// `config` is an optional partial `TerminalConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<Terminal, JsValue> {
        logging::init_logging(LevelFilter::Info);

        let config: TerminalConfig = if config.is_undefined() || config.is_null() {
            TerminalConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };

        let themes = BrowserThemeStore;
        let theme = themes.initial();
        if let Err(e) = host::set_theme_attribute(theme) {
            log::warn!("could not apply theme: {}", e);
        }

        Ok(Terminal {
            shared: Rc::new(Shared {
                session: RefCell::new(Session::new(config, theme)),
                themes,
                on_render: RefCell::new(None),
            }),
        })
    }

    /// Called with the current view (see `view`) after every change.
    #[wasm_bindgen(js_name = onRender)]
    pub fn on_render(&self, callback: js_sys::Function) {
        *self.shared.on_render.borrow_mut() = Some(callback);
        render(&self.shared);
    }

    /// Loads the command set and seeds the scrollback from the current path.
    pub fn init(&self) -> js_sys::Promise {
        let shared = self.shared.clone();
        wasm_bindgen_futures::future_to_promise(async move {
            let mut registry = CommandRegistry::new();
            let loaded = registry.load().await;
            let result = loaded.map(|_| registry);
            let path = host::current_path();
            let pending = shared.session.borrow_mut().registry_loaded(result, &path);
            pump(&shared, pending);
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Returns true when the page should `preventDefault` the key.
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&self, key: &str, alt: bool) -> bool {
        let key = Key::from_dom(key);
        let normal = self.shared.session.borrow().mode() == InputMode::Normal;
        let pending = self.shared.session.borrow_mut().key_down(key, alt);
        pump(&self.shared, pending);

        matches!(key, Key::Tab | Key::F11 | Key::ArrowUp | Key::ArrowDown)
            || (alt && key == Key::Enter)
            || (normal && matches!(key, Key::Char(_)))
    }

    #[wasm_bindgen(js_name = setInput)]
    pub fn set_input(&self, value: &str) {
        self.shared.session.borrow_mut().set_input(value);
        pump(&self.shared, None);
    }

    #[wasm_bindgen(js_name = clickCommand)]
    pub fn click_command(&self, name: &str) {
        let pending = self.shared.session.borrow_mut().click_command(name);
        pump(&self.shared, pending);
    }

    #[wasm_bindgen(js_name = clickInput)]
    pub fn click_input(&self) {
        self.shared.session.borrow_mut().click_input();
        pump(&self.shared, None);
    }

    /// Browser back/forward.
    pub fn popstate(&self) {
        let path = host::current_path();
        let pending = self.shared.session.borrow_mut().navigate(&path);
        pump(&self.shared, pending);
    }

    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&self) {
        self.shared.session.borrow_mut().toggle_theme();
        pump(&self.shared, None);
    }

    #[wasm_bindgen(js_name = toggleFullscreen)]
    pub fn toggle_fullscreen(&self) {
        self.shared.session.borrow_mut().toggle_fullscreen();
        pump(&self.shared, None);
    }

    pub fn ready(&self) -> bool {
        self.shared.session.borrow().is_ready()
    }

    pub fn view(&self) -> Result<JsValue, JsValue> {
        let view = self.shared.session.borrow().view();
        Ok(serde_wasm_bindgen::to_value(&view)?)
    }
}

// run queued host actions, then re-render; a pending command finishes later
// and comes back through here
fn pump(shared: &Rc<Shared>, pending: Option<PendingCommand>) {
    if let Some(pending) = pending {
        let shared = shared.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let (invocation, output) = pending.finish().await;
            shared.session.borrow_mut().complete(invocation, output);
            pump(&shared, None);
        });
    }

    let actions = shared.session.borrow_mut().take_actions();
    for action in actions {
        perform(shared, action);
    }
    render(shared);
}

fn perform(shared: &Rc<Shared>, action: HostAction) {
    let result = match action {
        HostAction::PushPath(path) => host::push_path(&path),
        HostAction::Defer { effect, delay_ms } => {
            let shared = shared.clone();
            Timeout::new(delay_ms, move || {
                shared.session.borrow_mut().apply(effect);
                pump(&shared, None);
            })
            .forget();
            Ok(())
        }
        HostAction::ResetStatus { delay_ms } => {
            let shared = shared.clone();
            Timeout::new(delay_ms, move || {
                shared.session.borrow_mut().settle_status();
                render(&shared);
            })
            .forget();
            Ok(())
        }
        HostAction::Scroll(direction) => host::emit_terminal_event(
            host::SCROLL_EVENT,
            &serde_json::json!({ "direction": direction }),
        ),
        HostAction::FocusInput | HostAction::BlurInput => {
            let mode = shared.session.borrow().mode();
            host::emit_terminal_event(
                host::MODE_EVENT,
                &serde_json::json!({ "mode": mode, "focus": mode == InputMode::Insert }),
            )
        }
        HostAction::PersistTheme(theme) => {
            shared.themes.save(theme);
            host::set_theme_attribute(theme)
                .and_then(|_| {
                    host::emit_terminal_event(host::THEME_EVENT, &serde_json::json!({ "theme": theme }))
                })
        }
        HostAction::FullscreenChanged(fullscreen) => host::emit_terminal_event(
            host::FULLSCREEN_EVENT,
            &serde_json::json!({ "fullscreen": fullscreen }),
        ),
    };

    if let Err(e) = result {
        log::warn!("host action failed: {}", e);
    }
}

fn render(shared: &Rc<Shared>) {
    let callback = match shared.on_render.borrow().clone() {
        Some(cb) => cb,
        None => return,
    };
    let view = shared.session.borrow().view();
    match serde_wasm_bindgen::to_value(&view) {
        Ok(value) => {
            if let Err(e) = callback.call1(&JsValue::NULL, &value) {
                log::error!("render callback failed: {}", HostError::from(e));
            }
        }
        Err(e) => log::error!("could not serialize view: {}", e),
    }
}
