use crate::error::HostError;
use crate::theme::{Theme, ThemeStore};
use web_sys::Storage;

const THEME_KEY: &str = "theme";
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Theme preference in `window.localStorage`, falling back to the browser's
/// color-scheme media query.
pub struct BrowserThemeStore;

impl BrowserThemeStore {
    fn local_storage() -> Result<Storage, HostError> {
        let win = web_sys::window().ok_or(HostError::NoWindow)?;
        win.local_storage()?
            .ok_or(HostError::Unavailable("localStorage"))
    }
}

impl ThemeStore for BrowserThemeStore {
    fn saved(&self) -> Option<Theme> {
        let storage = match Self::local_storage() {
            Ok(s) => s,
            Err(e) => {
                log::warn!("theme preference unavailable: {}", e);
                return None;
            }
        };
        let raw = storage.get_item(THEME_KEY).ok().flatten()?;
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::warn!("ignoring stored theme: {}", e);
                None
            }
        }
    }

    fn system_preference(&self) -> Theme {
        let prefers_dark = web_sys::window()
            .and_then(|win| win.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .map(|mql| mql.matches())
            .unwrap_or(false);
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn save(&self, theme: Theme) {
        let result = Self::local_storage()
            .and_then(|s| s.set_item(THEME_KEY, theme.as_str()).map_err(HostError::from));
        match result {
            Ok(()) => log::debug!("saved theme preference: {}", theme),
            Err(e) => log::warn!("could not save theme preference: {}", e),
        }
    }
}
