//! Image with a text fallback.
//!
//! A failed load swaps the `<img>` for its alt text. Nothing else on the
//! page depends on image loads.

use leptos::logging::warn;
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/image.module.css");

#[component]
pub fn FallbackImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let failed = RwSignal::new(false);
    let fallback_alt = alt.clone();

    view! {
        <Show
            when=move || !failed.get()
            fallback=move || {
                let text = fallback_alt.clone();
                view! {
                    <span class=format!("{} {}", css::fallback, class) role="img" aria-label=text.clone()>
                        {text.clone()}
                    </span>
                }
            }
        >
            <img
                src=src.clone()
                alt=alt.clone()
                class=class
                on:error={
                    let src = src.clone();
                    move |_| {
                        warn!("image failed to load: {}", src);
                        failed.set(true);
                    }
                }
            />
        </Show>
    }
}
