use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// Where the theme preference survives page loads.
pub trait ThemeStore {
    /// Saved preference, or `None` if nothing (valid) was saved.
    fn saved(&self) -> Option<Theme>;

    /// Fallback when nothing is saved, e.g. the OS color-scheme setting.
    fn system_preference(&self) -> Theme {
        Theme::default()
    }

    fn save(&self, theme: Theme);

    fn initial(&self) -> Theme {
        self.saved().unwrap_or_else(|| self.system_preference())
    }
}

/// Keeps the preference in memory. Used by the native binary and tests.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    saved: RefCell<Option<Theme>>,
    system: Theme,
}

impl MemoryThemeStore {
    pub fn new(system: Theme) -> Self {
        Self {
            saved: RefCell::new(None),
            system,
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn saved(&self) -> Option<Theme> {
        *self.saved.borrow()
    }

    fn system_preference(&self) -> Theme {
        self.system
    }

    fn save(&self, theme: Theme) {
        *self.saved.borrow_mut() = Some(theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_between_dark_and_light() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn parses_stored_values() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn falls_back_to_system_preference() {
        let store = MemoryThemeStore::new(Theme::Light);
        assert_eq!(store.initial(), Theme::Light);

        store.save(Theme::Dark);
        assert_eq!(store.initial(), Theme::Dark);
    }
}
