//! Pointer- and scroll-driven offsets: magnetic buttons, parallax images and
//! the page progress bar.

use crate::error::Result;
use crate::spring::{Spring, SpringConfig};

/// Fraction of the cursor's distance from the element centre that a magnetic
/// element follows.
pub const MAGNETIC_STRENGTH: f64 = 0.12;

/// Vertical travel of a parallax image, in pixels either side of rest.
pub const PARALLAX_RANGE_PX: f64 = 30.0;

/// Axis-aligned box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Two springs pulling an element toward a fraction of the cursor offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnetic {
    strength: f64,
    x: Spring,
    y: Spring,
}

impl Magnetic {
    pub fn new(strength: f64, spring: SpringConfig) -> Result<Self> {
        Ok(Self {
            strength,
            x: Spring::new(spring, 0.0)?,
            y: Spring::new(spring, 0.0)?,
        })
    }

    /// Cursor moved to `(client_x, client_y)` over an element at `rect`.
    pub fn pointer_move(&mut self, rect: &Rect, client_x: f64, client_y: f64) {
        let (cx, cy) = rect.center();
        self.x.set_target((client_x - cx) * self.strength);
        self.y.set_target((client_y - cy) * self.strength);
    }

    pub fn pointer_leave(&mut self) {
        self.x.set_target(0.0);
        self.y.set_target(0.0);
    }

    /// Advance both springs; returns the offset to render.
    pub fn step(&mut self, dt_ms: f64) -> (f64, f64) {
        (self.x.step(dt_ms), self.y.step(dt_ms))
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.x.position(), self.y.position())
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }
}

impl Default for Magnetic {
    fn default() -> Self {
        Self {
            strength: MAGNETIC_STRENGTH,
            x: Spring::magnetic(),
            y: Spring::magnetic(),
        }
    }
}

/// How far an element has travelled through the viewport, from its top edge
/// touching the viewport bottom (`0.0`) to its bottom edge leaving the
/// viewport top (`1.0`).
pub fn element_progress(rect: &Rect, viewport_height: f64) -> f64 {
    let span = viewport_height + rect.height;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect.top) / span).clamp(0.0, 1.0)
}

/// Vertical parallax offset for a given element progress.
pub fn parallax_offset(progress: f64, range_px: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    -range_px + 2.0 * range_px * p
}

/// Whole-page scroll progress in `[0, 1]`.
pub fn page_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON: Rect = Rect {
        left: 100.0,
        top: 100.0,
        width: 200.0,
        height: 50.0,
    };

    #[test]
    fn magnetic_follows_a_fraction_of_the_cursor() {
        let mut magnet = Magnetic::default();
        magnet.pointer_move(&BUTTON, 300.0, 125.0);
        for _ in 0..300 {
            magnet.step(16.0);
        }
        let (x, y) = magnet.offset();
        assert!((x - 12.0).abs() < 0.05, "x = {x}");
        assert!(y.abs() < 0.05, "y = {y}");
    }

    #[test]
    fn magnetic_returns_home_on_leave() {
        let mut magnet = Magnetic::default();
        magnet.pointer_move(&BUTTON, 0.0, 0.0);
        magnet.step(50.0);
        magnet.pointer_leave();
        for _ in 0..400 {
            magnet.step(16.0);
        }
        assert_eq!(magnet.offset(), (0.0, 0.0));
        assert!(magnet.is_at_rest());
    }

    #[test]
    fn element_progress_spans_entry_to_exit() {
        let vh = 800.0;
        let entering = Rect { top: 800.0, height: 400.0, ..Rect::default() };
        let leaving = Rect { top: -400.0, height: 400.0, ..Rect::default() };
        let centred = Rect { top: 200.0, height: 400.0, ..Rect::default() };
        assert_eq!(element_progress(&entering, vh), 0.0);
        assert_eq!(element_progress(&leaving, vh), 1.0);
        assert!((element_progress(&centred, vh) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn parallax_maps_to_symmetric_range() {
        assert_eq!(parallax_offset(0.0, 30.0), -30.0);
        assert_eq!(parallax_offset(0.5, 30.0), 0.0);
        assert_eq!(parallax_offset(1.0, 30.0), 30.0);
        assert_eq!(parallax_offset(4.0, 30.0), 30.0);
    }

    #[test]
    fn page_progress_handles_short_pages() {
        assert_eq!(page_progress(0.0, 500.0, 800.0), 0.0);
        assert_eq!(page_progress(600.0, 2000.0, 800.0), 0.5);
        assert_eq!(page_progress(5000.0, 2000.0, 800.0), 1.0);
    }
}
