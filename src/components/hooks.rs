//! Custom hooks shared by page components.
//!
//! Every listener or timer set up here is released when the calling
//! component's owner is disposed.

use leptos::ev;
use leptos::logging::log;
use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::core::{Breakpoint, RevealScheduler, ViewportClass};
use crate::utils::{BrowserTimer, Timer};

/// Reactive viewport class for `breakpoint`.
///
/// Backed by a `matchMedia` listener, so it updates on resize without a
/// reload. Reads [`ViewportClass::Desktop`] until the query is evaluated.
pub fn use_viewport_class(breakpoint: Breakpoint) -> Signal<ViewportClass> {
    let matches = use_media_query(breakpoint.media_query());
    Signal::derive(move || Breakpoint::from_match(matches.get()))
}

/// Loading flag that turns `false` once, `delay_ms` after this call.
///
/// If the owner is disposed first, the timer is cancelled and the flag is
/// never written.
pub fn use_reveal(delay_ms: u32) -> Signal<bool> {
    use_reveal_with(BrowserTimer, delay_ms)
}

/// [`use_reveal`] on an arbitrary [`Timer`].
pub fn use_reveal_with<T>(timer: T, delay_ms: u32) -> Signal<bool>
where
    T: Timer + 'static,
    T::Handle: 'static,
{
    let loading = RwSignal::new(true);
    let scheduler = StoredValue::new_local(RevealScheduler::new(timer, delay_ms));

    scheduler.update_value(|s| {
        s.mount(move || {
            loading.set(false);
            log!("reveal: content shown after {}ms", delay_ms);
        })
    });

    on_cleanup(move || {
        let _ = scheduler.try_update_value(|s| s.unmount());
    });

    loading.into()
}

/// Run `on_escape` when Escape is pressed anywhere in the window.
pub fn use_escape_key(on_escape: Callback<()>) {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_escape.run(());
        }
    });
    on_cleanup(move || handle.remove());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::timer::mock::ManualTimer;

    #[test]
    fn test_reveal_hook_flips_after_delay() {
        let owner = Owner::new();
        owner.set();

        let timer = ManualTimer::new();
        let loading = use_reveal_with(timer.clone(), 1500);

        timer.advance(1499);
        assert!(loading.get_untracked());
        timer.advance(1);
        assert!(!loading.get_untracked());
    }

    #[test]
    fn test_disposing_owner_cancels_reveal() {
        let root = Owner::new();
        root.set();

        let timer = ManualTimer::new();
        let page = Owner::new();
        let loading = page.with(|| use_reveal_with(timer.clone(), 1500));
        assert_eq!(timer.pending(), 1);

        timer.advance(700);
        page.cleanup();
        assert_eq!(timer.pending(), 0);

        timer.advance(5000);
        assert_ne!(loading.try_get_untracked(), Some(false));
    }
}
