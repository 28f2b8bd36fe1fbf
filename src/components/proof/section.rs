//! Payment methods section: QR thumbnails and instructions.

use leptos::prelude::*;

use super::{ProofViewerData, ProofViewerHost, use_proof_viewer};
use crate::app::AppContext;
use crate::components::image::FallbackImage;
use crate::models::PaymentProof;

stylance::import_crate_style!(css, "src/components/proof/proof.module.css");

#[component]
pub fn PaymentSection() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let data = use_proof_viewer();

    let (payments, contact_href) =
        ctx.site
            .with_value(|site| (site.payments.clone(), site.contact_href()));

    view! {
        <section class=css::section>
            <h3 class=css::heading>{payments.heading}</h3>
            <div class=css::cards>
                {payments
                    .proofs
                    .into_iter()
                    .map(|proof| view! { <ProofCard proof=proof data=data /> })
                    .collect_view()}
            </div>
            <Instructions email=payments.contact_email href=contact_href />
        </section>
        <ProofViewerHost data=data />
    }
}

/// Clickable QR thumbnail.
#[component]
fn ProofCard(proof: PaymentProof, data: ProofViewerData) -> impl IntoView {
    let id = proof.id.clone();
    let label = format!("Enlarge {}", proof.title);
    let expanded = {
        let id = id.clone();
        move || data.selected().as_ref() == Some(&id)
    };

    view! {
        <button
            class=css::card
            on:click=move |_| data.select(id.clone())
            aria-label=label
            aria-haspopup="dialog"
            aria-expanded=move || expanded().to_string()
        >
            <div class=css::thumbnailFrame>
                <FallbackImage src=proof.src alt=proof.alt class=css::thumbnail />
            </div>
            <p class=css::cardTitle>{proof.title}</p>
        </button>
    }
}

#[component]
fn Instructions(email: String, href: String) -> impl IntoView {
    view! {
        <div class=css::instructions>
            <h4 class=css::instructionsTitle>"Important Instructions:"</h4>
            <ol class=css::steps>
                <li>
                    "Before enrolling, email "
                    <a class=css::mail href=href.clone()>{email.clone()}</a>
                    " to confirm your class and time."
                </li>
                <li>
                    "After payment, send the confirmation screenshots to the same email address: "
                    <a class=css::mail href=href>{email}</a>
                </li>
            </ol>
        </div>
    }
}
