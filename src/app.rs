//! Root application module.
//!
//! Contains the main App component, the [`AppContext`] definition,
//! [`ThemeState`], and application-level setup logic following Leptos
//! conventions.

use leptos::logging::log;
use leptos::prelude::*;

use crate::components::LinksPage;
use crate::config::{THEME_STORAGE_KEY, site_config};
use crate::core::theme::resolve_initial;
use crate::models::{SiteConfig, ThemeMode};
use crate::utils::dom;

// ============================================================================
// ThemeState
// ============================================================================

/// Page-wide light/dark state.
///
/// Consumers read through [`ThemeState::mode`] and change it only through
/// [`ThemeState::toggle`]. Persistence and the `<html>` class are handled by
/// effects installed in [`App`], so this type has no browser dependency.
///
/// Only a toggle records a choice. A mode resolved from the system
/// preference is applied but never persisted, so the page keeps following
/// the OS until the visitor picks a mode.
#[derive(Clone, Copy)]
pub struct ThemeState {
    mode: RwSignal<ThemeMode>,
    choice: RwSignal<Option<ThemeMode>>,
}

impl ThemeState {
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            mode: RwSignal::new(initial),
            choice: RwSignal::new(None),
        }
    }

    /// Resolve the initial mode from storage and the OS preference.
    pub fn from_environment() -> Self {
        let stored = dom::stored_theme(THEME_STORAGE_KEY);
        Self::new(resolve_initial(
            stored.as_deref(),
            dom::system_prefers_dark(),
        ))
    }

    /// Read-only view of the current mode.
    pub fn mode(&self) -> Signal<ThemeMode> {
        self.mode.into()
    }

    /// Mode explicitly picked by the visitor, `None` until the first toggle.
    pub fn choice(&self) -> Signal<Option<ThemeMode>> {
        self.choice.into()
    }

    /// Switch to the opposite mode and remember it as the visitor's choice.
    pub fn toggle(&self) {
        self.mode.update(|mode| *mode = mode.toggled());
        let mode = self.mode.get_untracked();
        self.choice.set(Some(mode));
        log!("theme: {}", mode);
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Light/dark mode.
    pub theme: ThemeState,

    /// Validated page content.
    pub site: StoredValue<SiteConfig>,
}

impl AppContext {
    pub fn new(theme: ThemeState, site: SiteConfig) -> Self {
        Self {
            theme,
            site: StoredValue::new(site),
        }
    }
}

/// Mirror the theme onto `<html>`, and persist explicit choices.
fn setup_theme_effect(theme: ThemeState) {
    let mode = theme.mode();
    Effect::new(move || dom::apply_theme_class(mode.get()));

    let choice = theme.choice();
    Effect::new(move || {
        if let Some(mode) = choice.get() {
            dom::store_theme(THEME_STORAGE_KEY, mode);
        }
    });
}

/// Root application component with error boundary.
///
/// This component:
/// - Loads the embedded site config
/// - Creates and provides the global AppContext
/// - Wraps the page in an ErrorBoundary so a broken config shows a message
///   instead of a blank screen
#[component]
pub fn App() -> impl IntoView {
    let theme = ThemeState::from_environment();
    setup_theme_effect(theme);

    let page = site_config().map(|site| {
        provide_context(AppContext::new(theme, site));
        view! { <LinksPage /> }
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #e11d48; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="opacity: 0.7; margin-bottom: 2rem;">
                            "This page could not be loaded. Please try reloading."
                        </p>
                        <ul style="text-align: left; color: #e11d48; font-size: 0.9rem;">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                margin-top: 1.5rem;
                                background: #4f46e5;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 9999px;
                                cursor: pointer;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            {page}
        </ErrorBoundary>
    }
}
