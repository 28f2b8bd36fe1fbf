//! Profile header: avatar, name, tagline.

use leptos::prelude::*;

use super::image::FallbackImage;
use crate::app::AppContext;
use crate::config::WORD_STAGGER_MS;

stylance::import_crate_style!(css, "src/components/profile.module.css");

#[component]
pub fn ProfileHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let profile = ctx.site.with_value(|site| site.profile.clone());

    view! {
        <header class=css::profile>
            <div class=css::avatarWrap>
                <FallbackImage src=profile.image alt=profile.image_alt class=css::avatar />
            </div>
            <h1 class=css::name>
                <WordFadeIn words=profile.name />
            </h1>
            <p class=css::tagline>{profile.tagline}</p>
        </header>
    }
}

/// Text whose words fade in one after another.
#[component]
pub fn WordFadeIn(#[prop(into)] words: String) -> impl IntoView {
    words
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            let style = format!("animation-delay: {}ms", i as u32 * WORD_STAGGER_MS);
            view! { <span class=css::word style=style>{format!("{word} ")}</span> }
        })
        .collect_view()
}
