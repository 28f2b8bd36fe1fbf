//! Initial theme resolution.

use crate::models::ThemeMode;

/// Pick the starting theme.
///
/// A stored explicit choice wins; anything else (missing, `"system"`,
/// garbage) falls back to the system color scheme.
pub fn resolve_initial(stored: Option<&str>, system_prefers_dark: bool) -> ThemeMode {
    stored
        .and_then(|value| value.parse().ok())
        .unwrap_or(if system_prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_choice_wins() {
        assert_eq!(resolve_initial(Some("dark"), false), ThemeMode::Dark);
        assert_eq!(resolve_initial(Some("light"), true), ThemeMode::Light);
    }

    #[test]
    fn test_falls_back_to_system() {
        assert_eq!(resolve_initial(None, true), ThemeMode::Dark);
        assert_eq!(resolve_initial(None, false), ThemeMode::Light);
        assert_eq!(resolve_initial(Some("system"), true), ThemeMode::Dark);
        assert_eq!(resolve_initial(Some("purple"), false), ThemeMode::Light);
    }
}
