//! Outbound link directory entries.

use serde::Deserialize;

/// Window target for links that leave the page.
pub const NEW_TAB_TARGET: &str = "_blank";

/// Keeps the opened page from reaching back through `window.opener`
/// or learning the referrer.
pub const NEW_TAB_REL: &str = "noopener noreferrer";

/// Symbolic icon for a link row. Resolved to a concrete glyph in
/// `components::icons`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkIcon {
    Globe,
    Youtube,
    Telegram,
    Envelope,
}

/// One row in the link directory.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LinkEntry {
    pub name: String,
    pub description: String,
    /// Absolute `http(s)` URL or a `mailto:` URI.
    pub url: String,
    pub icon: LinkIcon,
    #[serde(default)]
    pub disabled: bool,
    /// Shows the "Launching Soon" badge. Purely decorative.
    #[serde(default)]
    pub launching_soon: bool,
}

/// What activating a link does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkActivation<'a> {
    /// Open `href` in a new top-level browsing context.
    Open { href: &'a str },
    /// Activation is swallowed; nothing navigates.
    Blocked,
}

impl LinkEntry {
    /// Resolve the activation behavior for this entry.
    ///
    /// Disabled entries are always blocked, whatever their URL.
    pub fn activation(&self) -> LinkActivation<'_> {
        if self.disabled {
            LinkActivation::Blocked
        } else {
            LinkActivation::Open { href: &self.url }
        }
    }
}
