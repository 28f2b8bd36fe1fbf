//! Bottom sheet for the enlarged proof (mobile).

use leptos::prelude::*;

use crate::components::hooks::use_escape_key;
use crate::components::image::FallbackImage;
use crate::models::PaymentProof;

use super::viewer_css as css;

/// Closes on the close button, a backdrop tap, or Escape.
#[component]
pub fn ProofDrawer(proof: PaymentProof, on_close: Callback<()>) -> impl IntoView {
    use_escape_key(on_close);

    view! {
        <div class=css::backdrop on:click=move |_| on_close.run(())></div>
        <div
            class=css::drawer
            role="dialog"
            aria-modal="true"
            aria-labelledby="proof-viewer-title"
            data-presentation="drawer"
            data-proof=proof.id.to_string()
        >
            <div class=css::handle>
                <div class=css::handleBar></div>
            </div>
            <header class=css::drawerHeader>
                <h2 id="proof-viewer-title" class=css::title>"QR Code"</h2>
                <p class=css::description>"Scan the QR Code to Proceed with Your Payment"</p>
            </header>
            <div class=css::drawerImageFrame>
                <FallbackImage src=proof.src alt=proof.alt class=css::image />
            </div>
            <footer class=css::drawerFooter>
                <button class=css::closeButton on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </footer>
        </div>
    }
}
