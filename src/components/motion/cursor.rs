//! Dot that trails the mouse pointer on wide screens.

use leptos::ev;
use leptos::prelude::*;
use leptos_use::{UseRafFnCallbackArgs, use_raf_fn};

use crate::components::hooks::use_viewport_class;
use crate::config::{CURSOR_DOT_OFFSET_PX, CURSOR_FOLLOWER_BREAKPOINT, CURSOR_SPRING};
use crate::core::Spring;

use super::css;

/// Cursor follower, unmounted at or below the cursor breakpoint.
#[component]
pub fn CursorFollower() -> impl IntoView {
    let viewport = use_viewport_class(CURSOR_FOLLOWER_BREAKPOINT);

    view! {
        <Show when=move || !viewport.get().is_mobile()>
            <CursorDot />
        </Show>
    }
}

#[component]
fn CursorDot() -> impl IntoView {
    let position = RwSignal::new((0.0_f64, 0.0_f64));
    let springs = StoredValue::new((
        Spring::new(CURSOR_SPRING, 0.0),
        Spring::new(CURSOR_SPRING, 0.0),
    ));
    let placed = StoredValue::new(false);

    let on_move = window_event_listener(ev::mousemove, move |event| {
        let x = f64::from(event.client_x()) - CURSOR_DOT_OFFSET_PX;
        let y = f64::from(event.client_y()) - CURSOR_DOT_OFFSET_PX;
        // First sighting: start at the pointer instead of flying in from the corner
        if !placed.get_value() {
            placed.set_value(true);
            springs.update_value(|(sx, sy)| {
                sx.jump(x);
                sy.jump(y);
            });
            position.set((x, y));
            return;
        }
        springs.update_value(|(sx, sy)| {
            sx.set_target(x);
            sy.set_target(y);
        });
    });
    on_cleanup(move || on_move.remove());

    use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let next = springs.try_update_value(|(sx, sy)| {
            if sx.is_at_rest() && sy.is_at_rest() {
                None
            } else {
                Some((sx.step(args.delta), sy.step(args.delta)))
            }
        });
        if let Some(Some(pos)) = next {
            position.set(pos);
        }
    });

    view! {
        <div
            class=css::cursor
            style=move || {
                let (x, y) = position.get();
                format!("transform: translate3d({x:.1}px, {y:.1}px, 0)")
            }
            aria-hidden="true"
        ></div>
    }
}
