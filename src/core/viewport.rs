//! Viewport classification.
//!
//! A [`Breakpoint`] turns a viewport width into a [`ViewportClass`]. The
//! reactive side lives in `components::hooks::use_viewport_class`, which
//! feeds media query matches through [`Breakpoint::from_match`].

/// Layout class of the current viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    /// Used until the first measurement arrives.
    #[default]
    Desktop,
}

impl ViewportClass {
    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

/// Inclusive maximum width (CSS pixels) still considered mobile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    max_width_px: u32,
}

impl Breakpoint {
    pub const fn new(max_width_px: u32) -> Self {
        Self { max_width_px }
    }

    pub const fn max_width_px(self) -> u32 {
        self.max_width_px
    }

    /// CSS media query matching widths at or below the breakpoint.
    pub fn media_query(self) -> String {
        format!("(max-width: {}px)", self.max_width_px)
    }

    /// Classify a measured width. `None` means no layout yet.
    pub fn classify(self, width: Option<f64>) -> ViewportClass {
        match width {
            Some(w) if w.is_finite() && w <= f64::from(self.max_width_px) => ViewportClass::Mobile,
            _ => ViewportClass::Desktop,
        }
    }

    /// Classify from the result of evaluating [`Self::media_query`].
    pub fn from_match(matches: bool) -> ViewportClass {
        if matches {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }
}
