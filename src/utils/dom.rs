//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Every helper degrades
//! to `None`/no-op when the API is unavailable.

use web_sys::{Storage, Window};

use crate::models::ThemeMode;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Evaluate a media query once.
pub fn matches_media(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .is_some_and(|mql| mql.matches())
}

/// Whether the OS asks for a dark color scheme.
pub fn system_prefers_dark() -> bool {
    matches_media("(prefers-color-scheme: dark)")
}

// =============================================================================
// Theme persistence
// =============================================================================

/// Read the raw persisted theme value.
pub fn stored_theme(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

/// Persist the theme choice.
pub fn store_theme(key: &str, mode: ThemeMode) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, mode.as_str());
    }
}

/// Toggle the `dark` class on `<html>` and set `color-scheme` to match.
pub fn apply_theme_class(mode: ThemeMode) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let _ = root.class_list().toggle_with_force("dark", mode.is_dark());
    let _ = root.set_attribute("style", &format!("color-scheme: {}", mode.as_str()));
}

// =============================================================================
// Scroll metrics
// =============================================================================

/// Current `(scroll_top, scroll_height, client_height)` of the document.
pub fn document_scroll_metrics() -> Option<(f64, f64, f64)> {
    let window = window()?;
    let root = window.document()?.document_element()?;
    let scroll_top = window.scroll_y().ok()?;
    Some((
        scroll_top,
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    ))
}
