//! Outbound link list.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::LINK_STAGGER_MS;
use crate::models::{LinkActivation, LinkEntry, NEW_TAB_REL, NEW_TAB_TARGET};

stylance::import_crate_style!(css, "src/components/links.module.css");

/// All links from the site config, in config order.
#[component]
pub fn LinkList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let links = ctx.site.with_value(|site| site.links.clone());

    view! {
        <nav class=css::list aria-label="Links">
            {links
                .into_iter()
                .enumerate()
                .map(|(index, link)| view! { <LinkCard link=link index=index /> })
                .collect_view()}
        </nav>
    }
}

/// One link row.
///
/// Enabled links open in a new tab without exposing `window.opener`.
/// Disabled links have no `href` and swallow clicks.
#[component]
fn LinkCard(link: LinkEntry, index: usize) -> impl IntoView {
    let style = format!("animation-delay: {}ms", index as u32 * LINK_STAGGER_MS);

    let body = view! {
        <span class=css::icon>
            <Icon icon=ic::link_icon(link.icon) />
        </span>
        <div class=css::text>
            <h2 class=css::name>{link.name.clone()}</h2>
            <p class=css::description>{link.description.clone()}</p>
        </div>
        {link.launching_soon.then(|| view! {
            <span class=css::badge>"Launching Soon"</span>
        })}
    };

    match link.activation() {
        LinkActivation::Open { href } => view! {
            <a
                class=css::card
                style=style
                href=href.to_string()
                target=NEW_TAB_TARGET
                rel=NEW_TAB_REL
            >
                {body}
            </a>
        }
        .into_any(),
        LinkActivation::Blocked => view! {
            <a
                class=format!("{} {}", css::card, css::disabled)
                style=style
                role="link"
                aria-disabled="true"
                tabindex="-1"
                on:click=|ev: leptos::ev::MouseEvent| ev.prevent_default()
            >
                {body}
            </a>
        }
        .into_any(),
    }
}
