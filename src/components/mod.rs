//! UI components built with Leptos.
//!
//! - [`page`] - Page shell with the delayed reveal (main entry point)
//! - [`links`] - Outbound link directory
//! - [`proof`] - Payment QR section and dialog/drawer viewer
//! - [`profile`] - Avatar, name, tagline
//! - [`theme_toggle`] - Light/dark switch
//! - [`motion`] - Scroll progress bar and cursor follower
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`hooks`] - Viewport, reveal, and keyboard hooks

pub mod hooks;
pub mod icons;
pub mod image;
pub mod links;
pub mod motion;
pub mod page;
pub mod profile;
pub mod proof;
pub mod theme_toggle;

pub use page::LinksPage;
