use thiserror::Error;
use wasm_bindgen::JsValue;

/// Raised by a command handler. The registry turns it into a scrollback line,
/// it never reaches the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CommandError {
    pub message: String,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// The one-shot registry load failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("failed to load command module '{module}': {reason}")]
    Module { module: String, reason: String },
}

/// Something the browser host could not do (no window, storage blocked, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("{0} is not available")]
    Unavailable(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        let text = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &"message".into())
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        HostError::Js(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_error_display_is_the_message() {
        let err = CommandError::new("Command failed");
        assert_eq!(err.to_string(), "Command failed");
    }

    #[test]
    fn load_error_names_the_module() {
        let err = LoadError::Module {
            module: "help".to_string(),
            reason: "unresolved".to_string(),
        };
        assert!(err.to_string().contains("'help'"));
        assert!(err.to_string().contains("unresolved"));
    }
}
