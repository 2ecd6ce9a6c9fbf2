//! Browser side effects: address bar, `<html data-theme>`, and the DOM events
//! the page listens to.

use crate::error::HostError;
use crate::theme::Theme;
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit, Document, Window};

pub const FULLSCREEN_EVENT: &str = "terminal-fullscreen";
pub const THEME_EVENT: &str = "terminal-theme";
pub const MODE_EVENT: &str = "terminal-mode";
pub const SCROLL_EVENT: &str = "terminal-scroll";

fn window() -> Result<Window, HostError> {
    web_sys::window().ok_or(HostError::NoWindow)
}

fn document() -> Result<Document, HostError> {
    window()?
        .document()
        .ok_or(HostError::Unavailable("document"))
}

/// `location.pathname`, or `/` if there is no location to read.
pub fn current_path() -> String {
    match window().and_then(|w| w.location().pathname().map_err(HostError::from)) {
        Ok(path) => path,
        Err(e) => {
            log::warn!("could not read current path: {}", e);
            "/".to_string()
        }
    }
}

pub fn push_path(path: &str) -> Result<(), HostError> {
    let history = window()?.history()?;
    history.push_state_with_url(&JsValue::NULL, "", Some(path))?;
    log::debug!("pushed {}", path);
    Ok(())
}

pub fn set_theme_attribute(theme: Theme) -> Result<(), HostError> {
    let root = document()?
        .document_element()
        .ok_or(HostError::Unavailable("document element"))?;
    root.set_attribute("data-theme", theme.as_str())?;
    Ok(())
}

/// Dispatches a bubbling `CustomEvent` on `window` with `detail` as its
/// payload.
pub fn emit_terminal_event<T: Serialize>(event_type: &str, detail: &T) -> Result<(), HostError> {
    // plain objects, not `Map`s
    let detail = detail
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| HostError::Js(e.to_string()))?;

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_detail(&detail);

    let event = CustomEvent::new_with_event_init_dict(event_type, &init)?;
    window()?.dispatch_event(&event)?;
    log::debug!("event sent: {}", event_type);
    Ok(())
}
