//! Payment proof viewer state machine.
//!
//! ```text
//! Closed ──select(id)──▶ Viewing(id) ──select(id2)──▶ Viewing(id2)
//!    ▲                        │
//!    └────────dismiss─────────┘
//! ```
//!
//! Selection and presentation are kept apart: the state only records
//! *which* proof is open, and [`Presentation`] is derived from the viewport
//! every time the viewer renders. Resizing while a proof is open swaps the
//! dialog for a drawer (or back) without touching the selection.

use super::viewport::ViewportClass;
use crate::models::ProofId;

/// Which proof, if any, is enlarged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProofViewer {
    #[default]
    Closed,
    Viewing(ProofId),
}

impl ProofViewer {
    /// Open `id`, replacing any current selection.
    pub fn select(&mut self, id: ProofId) {
        *self = Self::Viewing(id);
    }

    /// Close the viewer. Closing an already closed viewer is a no-op.
    pub fn dismiss(&mut self) {
        *self = Self::Closed;
    }

    pub fn selected(&self) -> Option<&ProofId> {
        match self {
            Self::Viewing(id) => Some(id),
            Self::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Viewing(_))
    }

    /// Presentation for the open proof under the given viewport class.
    pub fn presentation(&self, viewport: ViewportClass) -> Option<(Presentation, &ProofId)> {
        self.selected()
            .map(|id| (Presentation::for_viewport(viewport), id))
    }
}

/// How an open proof is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// Centered modal dialog (desktop).
    Dialog,
    /// Bottom sheet (mobile).
    Drawer,
}

impl Presentation {
    pub fn for_viewport(viewport: ViewportClass) -> Self {
        match viewport {
            ViewportClass::Mobile => Self::Drawer,
            ViewportClass::Desktop => Self::Dialog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProofId {
        ProofId::new(s)
    }

    #[test]
    fn test_starts_closed() {
        let viewer = ProofViewer::default();
        assert_eq!(viewer, ProofViewer::Closed);
        assert!(!viewer.is_open());
        assert!(viewer.selected().is_none());
        assert!(viewer.presentation(ViewportClass::Desktop).is_none());
        assert!(viewer.presentation(ViewportClass::Mobile).is_none());
    }

    #[test]
    fn test_select_then_dismiss() {
        let mut viewer = ProofViewer::default();
        viewer.select(id("bitcoin"));
        assert_eq!(viewer.selected(), Some(&id("bitcoin")));

        viewer.dismiss();
        assert_eq!(viewer, ProofViewer::Closed);
        assert!(viewer.selected().is_none());

        // Dismissing again stays closed
        viewer.dismiss();
        assert_eq!(viewer, ProofViewer::Closed);
    }

    #[test]
    fn test_switch_without_closing() {
        let mut viewer = ProofViewer::default();
        viewer.select(id("bitcoin"));

        let mut states = Vec::new();
        viewer.select(id("hesabpay"));
        states.push(viewer.clone());

        assert_eq!(states, vec![ProofViewer::Viewing(id("hesabpay"))]);
        assert!(viewer.is_open());
    }

    #[test]
    fn test_reselect_same_proof() {
        let mut viewer = ProofViewer::default();
        viewer.select(id("bitcoin"));
        viewer.select(id("bitcoin"));
        assert_eq!(viewer, ProofViewer::Viewing(id("bitcoin")));
    }

    #[test]
    fn test_presentation_mapping() {
        assert_eq!(
            Presentation::for_viewport(ViewportClass::Mobile),
            Presentation::Drawer
        );
        assert_eq!(
            Presentation::for_viewport(ViewportClass::Desktop),
            Presentation::Dialog
        );
    }

    #[test]
    fn test_resize_keeps_selection() {
        let mut viewer = ProofViewer::default();
        viewer.select(id("bitcoin"));

        let desktop = viewer.presentation(ViewportClass::Desktop);
        assert_eq!(desktop, Some((Presentation::Dialog, &id("bitcoin"))));

        let mobile = viewer.presentation(ViewportClass::Mobile);
        assert_eq!(mobile, Some((Presentation::Drawer, &id("bitcoin"))));

        assert_eq!(viewer.selected(), Some(&id("bitcoin")));
    }
}
