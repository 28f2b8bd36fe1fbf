//! Payment proof section and enlarged viewer.
//!
//! Thumbnails update the shared [`ProofViewerData`]; [`ProofViewerHost`]
//! picks the dialog (desktop) or drawer (mobile) presentation from the live
//! viewport class each time it renders.

stylance::import_crate_style!(viewer_css, "src/components/proof/viewer.module.css");

mod dialog;
mod drawer;
mod hook;
mod section;
mod viewer;

pub use dialog::ProofDialog;
pub use drawer::ProofDrawer;
pub use hook::{ProofViewerData, use_proof_viewer};
pub use section::PaymentSection;
pub use viewer::ProofViewerHost;
