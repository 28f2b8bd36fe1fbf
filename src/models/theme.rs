//! Light/dark color scheme.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Color scheme applied to the whole page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value persisted to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored value is neither `light` nor `dark`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme mode: {0:?}")]
pub struct UnknownThemeMode(pub String);

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownThemeMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_parse() {
        assert_eq!("dark".parse(), Ok(ThemeMode::Dark));
        assert_eq!(" light ".parse(), Ok(ThemeMode::Light));
        assert!("system".parse::<ThemeMode>().is_err());
        assert!("".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_unknown_mode_message() {
        let err = "purple".parse::<ThemeMode>().unwrap_err();
        assert_eq!(err.to_string(), "unknown theme mode: \"purple\"");
    }

    #[test]
    fn test_display_matches_storage_value() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.to_string(), mode.as_str());
            assert_eq!(mode.as_str().parse(), Ok(mode));
        }
    }
}
