//! Page shell.
//!
//! Shows the loading placeholder until the reveal delay elapses, then the
//! full page. Nothing under [`PageContent`] (links, images, listeners) is
//! created while the placeholder is up.

use leptos::prelude::*;

use super::hooks::use_reveal;
use super::links::LinkList;
use super::motion::{CursorFollower, ScrollProgressBar};
use super::profile::ProfileHeader;
use super::proof::PaymentSection;
use super::theme_toggle::ThemeToggle;
use crate::config::REVEAL_DELAY_MS;

stylance::import_crate_style!(css, "src/components/page.module.css");

/// Link-in-bio page with delayed reveal.
#[component]
pub fn LinksPage() -> impl IntoView {
    let loading = use_reveal(REVEAL_DELAY_MS);

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <LoadingPlaceholder /> }>
            <PageContent />
        </Show>
    }
}

/// Animated square shown before the reveal.
#[component]
fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class=css::loading role="status" aria-label="Loading">
            <div class=css::loader></div>
        </div>
    }
}

#[component]
fn PageContent() -> impl IntoView {
    view! {
        <CursorFollower />
        <ScrollProgressBar />
        <div class=css::page>
            <main class=css::main>
                <div class=css::toolbar>
                    <ThemeToggle />
                </div>
                <div class=css::sections>
                    <ProfileHeader />
                    <LinkList />
                    <PaymentSection />
                </div>
            </main>
        </div>
    }
}
