//! Decorative motion: scroll progress bar and cursor follower.
//!
//! Both are passive observers driven by `requestAnimationFrame`; neither
//! blocks input handling.

stylance::import_crate_style!(css, "src/components/motion/motion.module.css");

mod cursor;
mod scroll_progress;

pub use cursor::CursorFollower;
pub use scroll_progress::ScrollProgressBar;
