// native REPL over the same session the browser drives
// usage: ng-terminal [config.json]

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use futures::executor::block_on;
    use ng_terminal::session::EntryKind;
    use ng_terminal::{markup, CommandRegistry, MemoryThemeStore, Session, TerminalConfig, Theme, ThemeStore};
    use std::io::{self, BufRead, Write};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => TerminalConfig::from_json(&std::fs::read_to_string(&path)?)?,
        None => TerminalConfig::default(),
    };

    let themes = MemoryThemeStore::new(Theme::Dark);
    let mut session = Session::new(config, themes.initial());

    let mut registry = CommandRegistry::new();
    let loaded = block_on(registry.load());
    let pending = session.registry_loaded(loaded.map(|_| registry), "/");
    repl::settle(&mut session, &themes, pending);

    let show = |session: &Session| {
        for entry in session.scrollback() {
            // the typed line is already on screen
            if entry.kind == EntryKind::Output {
                println!("{}", markup::strip(&entry.text));
            }
        }
    };
    show(&session);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", session.config().prompt);
        stdout.flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        if line == "exit" {
            break;
        }

        let before = session.scrollback();
        session.set_input(line);
        let pending = session.submit();
        repl::settle(&mut session, &themes, pending);
        if session.scrollback() != before {
            show(&session);
        }
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
mod repl {
    use futures::executor::block_on;
    use ng_terminal::{HostAction, MemoryThemeStore, PendingCommand, Session, ThemeStore};

    /// No timers here: deferred effects and the status reset happen at once.
    pub fn settle(session: &mut Session, themes: &MemoryThemeStore, pending: Option<PendingCommand>) {
        if let Some(pending) = pending {
            let (invocation, output) = block_on(pending.finish());
            session.complete(invocation, output);
        }

        loop {
            let actions = session.take_actions();
            if actions.is_empty() {
                break;
            }
            for action in actions {
                match action {
                    HostAction::Defer { effect, .. } => session.apply(effect),
                    HostAction::ResetStatus { .. } => session.settle_status(),
                    HostAction::PersistTheme(theme) => themes.save(theme),
                    HostAction::PushPath(path) => log::debug!("location is now {}", path),
                    _ => {}
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
