use serde::{Deserialize, Serialize};

/// Tunables for a terminal session. Every field has a default, so a partial
/// JSON object (or none at all) is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Most entries kept in input history; oldest are evicted.
    pub history_limit: usize,
    /// Most entries kept in the scrollback.
    pub max_scrollback: usize,
    /// Delay before fullscreen/theme toggles are applied.
    pub effect_delay_ms: u32,
    /// How long "Processing..." shows before going back to "Ready".
    pub status_reset_ms: u32,
    pub prompt: String,
    pub version: String,
    /// Commands linked from the footer printed after most outputs.
    pub footer_commands: Vec<String>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            history_limit: 50,
            max_scrollback: 500,
            effect_delay_ms: 100,
            status_reset_ms: 500,
            prompt: "guest@nate.green:~$".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            footer_commands: [
                "about", "skills", "projects", "contact", "help", "sitemap", "theme", "fullscreen",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        }
    }
}

impl TerminalConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The "Available commands: ..." line, with each name marked clickable.
    pub fn footer_line(&self) -> String {
        let links: Vec<String> = self
            .footer_commands
            .iter()
            .map(|c| format!("<cmd>{}</cmd>", c))
            .collect();
        format!("Available commands: {}", links.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = TerminalConfig::from_json(r#"{ "history_limit": 5 }"#).unwrap();
        assert_eq!(config.history_limit, 5);
        assert_eq!(config.effect_delay_ms, 100);
        assert_eq!(config.status_reset_ms, 500);
    }

    #[test]
    fn footer_marks_every_command() {
        let config = TerminalConfig {
            footer_commands: vec!["about".to_string(), "help".to_string()],
            ..TerminalConfig::default()
        };
        assert_eq!(
            config.footer_line(),
            "Available commands: <cmd>about</cmd> | <cmd>help</cmd>"
        );
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(TerminalConfig::from_json(r#"{ "history_limit": "lots" }"#).is_err());
    }
}
