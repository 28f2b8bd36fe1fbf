//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::LinkIcon;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuGlobe as Globe, LuMail as Envelope, LuMoon as Moon, LuSend as Telegram, LuSun as Sun,
        LuX as Close, LuYoutube as Youtube,
    };
}

mod bootstrap {
    pub use icondata::{
        BsEnvelopeFill as Envelope, BsGlobe as Globe, BsMoonStarsFill as Moon,
        BsSunFill as Sun, BsTelegram as Telegram, BsXLg as Close, BsYoutube as Youtube,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(GLOBE, Globe);
themed_icon!(YOUTUBE, Youtube);
themed_icon!(TELEGRAM, Telegram);
themed_icon!(ENVELOPE, Envelope);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(CLOSE, Close);

/// Glyph for a link row.
pub fn link_icon(icon: LinkIcon) -> Icon {
    match icon {
        LinkIcon::Globe => GLOBE,
        LinkIcon::Youtube => YOUTUBE,
        LinkIcon::Telegram => TELEGRAM,
        LinkIcon::Envelope => ENVELOPE,
    }
}
