//! Page behavior, independent of rendering.
//!
//! - [`reveal`] - One-shot placeholder to content transition
//! - [`viewport`] - Mobile/desktop classification
//! - [`proof`] - Payment proof viewer state machine and presentation routing
//! - [`scroll`], [`spring`] - Scroll progress and spring smoothing
//! - [`theme`] - Initial theme resolution
//! - [`error`] - Config errors

pub mod error;
pub mod proof;
pub mod reveal;
pub mod scroll;
pub mod spring;
pub mod theme;
pub mod viewport;

pub use proof::{Presentation, ProofViewer};
pub use reveal::{RevealPhase, RevealScheduler};
pub use scroll::{ScrollTracker, scroll_progress};
pub use spring::{Spring, SpringConfig};
pub use viewport::{Breakpoint, ViewportClass};
