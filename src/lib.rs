//! Link-in-bio page rendered client-side with Leptos.
//!
//! Page behavior (reveal timing, viewport classification, proof viewer
//! state, scroll smoothing) lives in [`core`] and is plain Rust, testable
//! off the browser. [`components`] wires it to the DOM.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::App;
