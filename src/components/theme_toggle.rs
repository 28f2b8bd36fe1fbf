//! Light/dark toggle button.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/theme_toggle.module.css");

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let mode = ctx.theme.mode();

    let label = Signal::derive(move || {
        if mode.get().is_dark() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    });

    // Both glyphs stay mounted; CSS swaps them so the transition can run.
    let sun_class = move || {
        if mode.get().is_dark() {
            format!("{} {}", css::glyph, css::hiddenSun)
        } else {
            css::glyph.to_string()
        }
    };
    let moon_class = move || {
        if mode.get().is_dark() {
            css::glyph.to_string()
        } else {
            format!("{} {}", css::glyph, css::hiddenMoon)
        }
    };

    view! {
        <button
            class=css::toggle
            on:click=move |_| ctx.theme.toggle()
            title=move || label.get()
            aria-label=move || label.get()
        >
            <span class=move || format!("{} {}", sun_class(), css::sun)>
                <Icon icon=ic::SUN />
            </span>
            <span class=move || format!("{} {}", moon_class(), css::moon)>
                <Icon icon=ic::MOON />
            </span>
        </button>
    }
}
