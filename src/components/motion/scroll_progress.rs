//! Thin bar across the top of the viewport tracking scroll position.

use leptos::ev;
use leptos::prelude::*;
use leptos_use::{UseRafFnCallbackArgs, use_raf_fn};

use crate::config::SCROLL_SPRING;
use crate::core::ScrollTracker;
use crate::utils::dom;

use super::css;

#[component]
pub fn ScrollProgressBar() -> impl IntoView {
    let tracker = StoredValue::new(ScrollTracker::new(SCROLL_SPRING));
    let progress = RwSignal::new(tracker.with_value(ScrollTracker::progress));

    let sample = move || {
        if let Some((top, height, client)) = dom::document_scroll_metrics() {
            tracker.update_value(|t| t.observe(top, height, client));
        }
    };
    sample();

    let on_scroll = window_event_listener(ev::scroll, move |_| sample());
    let on_resize = window_event_listener(ev::resize, move |_| sample());
    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
    });

    use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let next = tracker.try_update_value(|t| (!t.is_settled()).then(|| t.tick(args.delta)));
        if let Some(Some(value)) = next
            && progress.get_untracked() != value
        {
            progress.set(value);
        }
    });

    view! {
        <div
            class=css::progressBar
            style=move || format!("transform: scaleX({:.4})", progress.get())
            aria-hidden="true"
        ></div>
    }
}
