//! Scroll progress derivation and smoothing.

use super::spring::{Spring, SpringConfig};

/// Fraction of the document scrolled, in `[0, 1]`.
///
/// Pages that cannot scroll report 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if !scroll_top.is_finite() || !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// Raw scroll progress fed through a spring for the progress bar.
#[derive(Clone, Copy, Debug)]
pub struct ScrollTracker {
    spring: Spring,
}

impl ScrollTracker {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            spring: Spring::new(config, 0.0),
        }
    }

    /// Record a new scroll position.
    pub fn observe(&mut self, scroll_top: f64, scroll_height: f64, client_height: f64) {
        self.spring
            .set_target(scroll_progress(scroll_top, scroll_height, client_height));
    }

    /// Advance the spring; returns the smoothed progress.
    pub fn tick(&mut self, dt_ms: f64) -> f64 {
        self.spring.step(dt_ms).clamp(0.0, 1.0)
    }

    pub fn progress(&self) -> f64 {
        self.spring.value().clamp(0.0, 1.0)
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_at_rest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_ratio() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(1000.0, 2000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_progress_clamped() {
        // Overscroll bounce on touch devices
        assert_eq!(scroll_progress(-40.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1100.0, 2000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_unscrollable_page() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 2000.0, 800.0), 0.0);
    }

    #[test]
    fn test_tracker_follows_scroll() {
        let config = SpringConfig::new(100.0, 30.0).with_rest_delta(0.001);
        let mut tracker = ScrollTracker::new(config);
        tracker.observe(1000.0, 2000.0, 1000.0);
        assert_eq!(tracker.progress(), 0.0);

        let first = tracker.tick(16.0);
        assert!(first > 0.0 && first < 1.0);

        for _ in 0..600 {
            tracker.tick(16.0);
        }
        assert!(tracker.is_settled());
        assert_eq!(tracker.progress(), 1.0);
    }
}
