//! Address-bar routing: which path a command pushes, and which command a path
//! seeds on load or back/forward navigation.

pub const HOME_COMMAND: &str = "banner";

/// Names that count as the banner for routing and footer purposes.
pub const BANNER_NAMES: &[&str] = &["banner", "welcome", "intro", "home", "h"];

/// Names that toggle the input mode silently.
pub const MODE_NAMES: &[&str] = &["mode", "vim", "m"];

const CONTENT_ROUTES: &[&str] = &["about", "contact", "projects", "skills"];

pub fn is_banner(name: &str) -> bool {
    BANNER_NAMES.contains(&name)
}

pub fn is_mode(name: &str) -> bool {
    MODE_NAMES.contains(&name)
}

/// Path to push after running `name`, or `None` to leave the address bar alone.
pub fn path_for_command(name: &str) -> Option<String> {
    if is_banner(name) {
        return Some("/".to_string());
    }
    CONTENT_ROUTES
        .iter()
        .find(|r| **r == name)
        .map(|r| format!("/{}", r))
}

/// Command to run for a browser path. Unknown paths land on the banner.
pub fn route_for_path(path: &str) -> &'static str {
    let trimmed = path.trim().trim_end_matches('/');
    let segment = trimmed.strip_prefix('/').unwrap_or(trimmed);
    CONTENT_ROUTES
        .iter()
        .copied()
        .find(|r| *r == segment)
        .unwrap_or(HOME_COMMAND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_commands_push_their_path() {
        assert_eq!(path_for_command("projects").as_deref(), Some("/projects"));
        assert_eq!(path_for_command("contact").as_deref(), Some("/contact"));
        assert_eq!(path_for_command("skills").as_deref(), Some("/skills"));
        assert_eq!(path_for_command("about").as_deref(), Some("/about"));
    }

    #[test]
    fn banner_and_aliases_push_root() {
        for name in ["banner", "home", "welcome", "intro", "h"] {
            assert_eq!(path_for_command(name).as_deref(), Some("/"), "{}", name);
        }
    }

    #[test]
    fn other_commands_leave_path_alone() {
        for name in ["help", "clear", "mode", "theme", "sitemap", "nope"] {
            assert_eq!(path_for_command(name), None, "{}", name);
        }
    }

    #[test]
    fn resolves_paths() {
        assert_eq!(route_for_path("/"), "banner");
        assert_eq!(route_for_path(""), "banner");
        assert_eq!(route_for_path("/skills"), "skills");
        assert_eq!(route_for_path("/projects/"), "projects");
        assert_eq!(route_for_path("/contact"), "contact");
        assert_eq!(route_for_path("/about"), "about");
        assert_eq!(route_for_path("/wp-admin"), "banner");
        assert_eq!(route_for_path("/skills/extra"), "banner");
    }
}
