//! Routes the open proof to a dialog or a drawer.

use leptos::prelude::*;

use super::{ProofDialog, ProofDrawer, ProofViewerData};
use crate::app::AppContext;
use crate::core::Presentation;

/// Renders nothing while closed.
///
/// The presentation is re-derived from the viewport signal on every change,
/// so resizing across the breakpoint swaps dialog and drawer while the
/// selection stays put.
#[component]
pub fn ProofViewerHost(data: ProofViewerData) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let open = Memo::new(move |_| data.open());
    let on_close = Callback::new(move |_: ()| data.dismiss());

    move || {
        let (presentation, id) = open.get()?;
        let proof = ctx.site.with_value(|site| site.proof(&id).cloned())?;

        Some(match presentation {
            Presentation::Dialog => view! { <ProofDialog proof=proof on_close=on_close /> }.into_any(),
            Presentation::Drawer => view! { <ProofDrawer proof=proof on_close=on_close /> }.into_any(),
        })
    }
}
