//! Utility modules for browser access, timers, and URL checks.
//!
//! Provides:
//! - [`dom`] - Window, storage, and document helpers
//! - [`Timer`], [`BrowserTimer`] - One-shot timers (mock clock under the `mock` feature)
//! - [`validate_link_url`] - Outbound link URL validation

pub mod dom;
pub mod timer;
mod url;

pub use timer::{BrowserTimer, Timer};
pub use url::{LinkScheme, UrlValidationError, extract_host, validate_link_url};
