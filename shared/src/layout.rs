//! # Responsive Layout
//!
//! The page has exactly two render branches. [`LayoutMode::for_width`] picks
//! one by comparing the viewport width against a breakpoint; the comparison is
//! re-run on every resize with no smoothing.
//!
//! ```rust
//! use shared::layout::{LayoutMode, BREAKPOINT_PX};
//!
//! assert_eq!(LayoutMode::for_width(375.0), LayoutMode::Mobile);
//! assert_eq!(LayoutMode::for_width(BREAKPOINT_PX as f64), LayoutMode::Desktop);
//! ```

/// Default viewport width, in CSS pixels, at which the desktop layout starts.
pub const BREAKPOINT_PX: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Mobile,
    Desktop,
}

impl LayoutMode {
    /// Layout for `width` against the default [`BREAKPOINT_PX`].
    pub fn for_width(width: f64) -> Self {
        Self::for_width_with(width, BREAKPOINT_PX)
    }

    /// Widths strictly below `breakpoint` are mobile; the breakpoint itself is desktop.
    pub fn for_width_with(width: f64, breakpoint: u32) -> Self {
        if width < f64::from(breakpoint) {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == LayoutMode::Mobile
    }

    pub fn is_desktop(self) -> bool {
        self == LayoutMode::Desktop
    }
}

/// Open/closed state of the header's two popovers.
///
/// The flags are independent: opening one never closes the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderMenus {
    pub menu_open: bool,
    pub language_open: bool,
}

impl HeaderMenus {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_languages(&mut self) {
        self.language_open = !self.language_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn close_languages(&mut self) {
        self.language_open = false;
    }

    /// Image shown for the mobile menu button.
    pub fn menu_icon(&self) -> &'static str {
        if self.menu_open {
            "images/close_icon.svg"
        } else {
            "images/menu_icon.svg"
        }
    }
}
