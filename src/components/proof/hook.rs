//! Shared proof viewer state hook.

use leptos::logging::log;
use leptos::prelude::*;

use crate::components::hooks::use_viewport_class;
use crate::config::PROOF_VIEWER_BREAKPOINT;
use crate::core::{Presentation, ProofViewer, ViewportClass};
use crate::models::ProofId;

/// Proof selection plus the viewport signal used to present it.
///
/// `Copy`, so thumbnails, the viewer host, and close controls can all hold
/// their own handle.
#[derive(Clone, Copy)]
pub struct ProofViewerData {
    /// Current selection.
    pub state: RwSignal<ProofViewer>,
    /// Viewport class at [`PROOF_VIEWER_BREAKPOINT`].
    pub viewport: Signal<ViewportClass>,
}

impl ProofViewerData {
    pub fn new(viewport: Signal<ViewportClass>) -> Self {
        Self {
            state: RwSignal::new(ProofViewer::default()),
            viewport,
        }
    }

    /// Open `id`, replacing whatever is open.
    pub fn select(&self, id: ProofId) {
        log!("proof viewer: open {}", id);
        self.state.update(|state| state.select(id));
    }

    /// Close the viewer.
    pub fn dismiss(&self) {
        if self.state.with_untracked(ProofViewer::is_open) {
            log!("proof viewer: closed");
            self.state.update(ProofViewer::dismiss);
        }
    }

    pub fn selected(&self) -> Option<ProofId> {
        self.state.with(|state| state.selected().cloned())
    }

    /// Presentation and proof to render right now, if any.
    pub fn open(&self) -> Option<(Presentation, ProofId)> {
        let viewport = self.viewport.get();
        self.state.with(|state| {
            state
                .presentation(viewport)
                .map(|(presentation, id)| (presentation, id.clone()))
        })
    }
}

/// Create proof viewer state bound to the proof viewer breakpoint.
pub fn use_proof_viewer() -> ProofViewerData {
    ProofViewerData::new(use_viewport_class(PROOF_VIEWER_BREAKPOINT))
}
