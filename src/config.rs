//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Page content (profile, links, payment proofs) lives in
//! `assets/site.toml` and is embedded at compile time using `include_str!`.

use crate::core::error::ConfigError;
use crate::core::{Breakpoint, SpringConfig};
use crate::models::SiteConfig;

// =============================================================================
// Site Content (loaded at compile time)
// =============================================================================

/// Raw site config.
pub const SITE_TOML: &str = include_str!("../assets/site.toml");

/// Parse and validate the embedded site config.
pub fn site_config() -> Result<SiteConfig, ConfigError> {
    SiteConfig::from_toml(SITE_TOML)
}

// =============================================================================
// Reveal
// =============================================================================

/// Delay between mount and replacing the loading placeholder with content.
pub const REVEAL_DELAY_MS: u32 = 1500;

// =============================================================================
// Responsive Breakpoints
// =============================================================================

/// At or below this width the payment proof opens in a drawer.
pub const PROOF_VIEWER_BREAKPOINT: Breakpoint = Breakpoint::new(640);

/// At or below this width the cursor follower is hidden.
///
/// Independent of [`PROOF_VIEWER_BREAKPOINT`].
pub const CURSOR_FOLLOWER_BREAKPOINT: Breakpoint = Breakpoint::new(768);

// =============================================================================
// Motion
// =============================================================================

/// Spring smoothing the scroll progress bar.
pub const SCROLL_SPRING: SpringConfig = SpringConfig::new(100.0, 30.0).with_rest_delta(0.001);

/// Spring for the cursor follower dot.
pub const CURSOR_SPRING: SpringConfig = SpringConfig::new(500.0, 28.0).with_rest_delta(0.5);

/// Half the follower dot size; centers it on the pointer.
pub const CURSOR_DOT_OFFSET_PX: f64 = 12.0;

/// Entrance stagger between consecutive link cards.
pub const LINK_STAGGER_MS: u32 = 100;

/// Entrance stagger between words of a fading heading.
pub const WORD_STAGGER_MS: u32 = 150;

// =============================================================================
// Theme
// =============================================================================

/// localStorage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LinkActivation, ProofId};

    #[test]
    fn test_embedded_site_config_is_valid() {
        let site = site_config().unwrap();
        let names: Vec<&str> = site.links.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Farid Fana",
                "Learn With Fana",
                "Farid Fana - فرید فنا",
                "Fanacryptonians",
                "Contact",
            ]
        );
        assert!(site.proof(&ProofId::new("bitcoin")).is_some());
        assert!(site.proof(&ProofId::new("hesabpay")).is_some());
    }

    #[test]
    fn test_only_website_link_is_disabled() {
        let site = site_config().unwrap();
        let blocked: Vec<&str> = site
            .links
            .iter()
            .filter(|l| l.activation() == LinkActivation::Blocked)
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(blocked, vec!["Farid Fana"]);
        assert!(site.links[0].launching_soon);
    }

    #[test]
    fn test_breakpoints_are_independent() {
        assert_eq!(PROOF_VIEWER_BREAKPOINT.max_width_px(), 640);
        assert_eq!(CURSOR_FOLLOWER_BREAKPOINT.max_width_px(), 768);
    }
}
