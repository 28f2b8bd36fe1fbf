//! Data models and types for the page.
//!
//! Contains domain types for:
//! - [`LinkEntry`], [`LinkIcon`], [`LinkActivation`] - Outbound link directory
//! - [`PaymentProof`], [`ProofId`] - Payment QR codes
//! - [`SiteConfig`] - Page content loaded from the embedded TOML file
//! - [`ThemeMode`] - Light/dark color scheme

mod link;
mod proof;
mod site;
mod theme;

pub use link::{LinkActivation, LinkEntry, LinkIcon, NEW_TAB_REL, NEW_TAB_TARGET};
pub use proof::{PaymentProof, ProofId};
pub use site::{Payments, Profile, SiteConfig};
pub use theme::{ThemeMode, UnknownThemeMode};
