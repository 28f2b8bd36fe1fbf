//! Custom error types for the application.
//!
//! Page state transitions are total, so the only failure surfaced to the
//! user is a broken site config, which renders through the root
//! `ErrorBoundary`.

use thiserror::Error;

use crate::utils::UrlValidationError;

/// Errors raised while loading the embedded site config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML syntax or shape mismatch.
    #[error("invalid site config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A required field is blank.
    #[error("site config field `{0}` must not be empty")]
    EmptyField(&'static str),
    /// A link points somewhere the page cannot open.
    #[error("link '{name}' has an invalid URL: {source}")]
    InvalidLinkUrl {
        name: String,
        source: UrlValidationError,
    },
    /// Two payment proofs share an id.
    #[error("payment proof id '{0}' is used more than once")]
    DuplicateProof(String),
}
