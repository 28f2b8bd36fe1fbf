//! Centered modal for the enlarged proof (desktop).

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::hooks::use_escape_key;
use crate::components::icons as ic;
use crate::components::image::FallbackImage;
use crate::models::PaymentProof;

use super::viewer_css as css;

/// Closes on the close buttons, a backdrop click, or Escape.
#[component]
pub fn ProofDialog(proof: PaymentProof, on_close: Callback<()>) -> impl IntoView {
    use_escape_key(on_close);

    view! {
        <div class=css::backdrop on:click=move |_| on_close.run(())></div>
        <div
            class=css::dialog
            role="dialog"
            aria-modal="true"
            aria-labelledby="proof-viewer-title"
            data-presentation="dialog"
            data-proof=proof.id.to_string()
        >
            <header class=css::header>
                <h2 id="proof-viewer-title" class=css::title>"QR Code"</h2>
                <p class=css::description>"Scan the QR Code to Proceed with Your Payment"</p>
                <button
                    class=css::iconButton
                    on:click=move |_| on_close.run(())
                    title="Close"
                    aria-label="Close QR code"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </header>
            <div class=css::imageFrame>
                <FallbackImage src=proof.src alt=proof.alt class=css::image />
            </div>
            <footer class=css::footer>
                <button class=css::closeButton on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </footer>
        </div>
    }
}
