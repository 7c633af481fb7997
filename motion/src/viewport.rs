//! Viewport-entry triggers.
//!
//! The DOM side reports raw intersection changes; [`Visibility`] turns them
//! into the "has this been seen" signal the reveals and counters react to.

/// Root margin used for headings, counters and most sections.
pub const SECTION_MARGIN_PX: f64 = 80.0;
/// Root margin used for grids and lists.
pub const GRID_MARGIN_PX: f64 = 50.0;

/// When an element should start its entrance animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Right after first paint.
    Mount,
    /// When the element enters the viewport shrunk by `margin_px` on every side.
    InView(ViewportTrigger),
}

impl Trigger {
    pub const fn in_view(margin_px: f64) -> Self {
        Trigger::InView(ViewportTrigger::once(margin_px))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTrigger {
    pub margin_px: f64,
    pub once: bool,
}

impl ViewportTrigger {
    pub const fn once(margin_px: f64) -> Self {
        Self {
            margin_px,
            once: true,
        }
    }

    /// `rootMargin` for an `IntersectionObserver`: the margin shrinks the
    /// viewport, so elements must be this far inside before they count.
    pub fn root_margin(&self) -> String {
        format!("-{}px", self.margin_px.abs())
    }

    /// Geometric fallback used when no observer is available: is an element
    /// spanning `top..bottom` (viewport coordinates) inside the shrunk viewport?
    pub fn intersects(&self, top: f64, bottom: f64, viewport_height: f64) -> bool {
        let margin = self.margin_px.abs();
        bottom > margin && top < viewport_height - margin
    }
}

impl Default for ViewportTrigger {
    fn default() -> Self {
        Self::once(SECTION_MARGIN_PX)
    }
}

/// Latched visibility for a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    visible: bool,
    latched: bool,
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether later reports can still change the state.
    pub fn is_latched(&self) -> bool {
        self.latched
    }

    /// Feed one intersection report. Returns the new state if it changed.
    pub fn observe(&mut self, trigger: &ViewportTrigger, intersecting: bool) -> Option<bool> {
        if self.latched || intersecting == self.visible {
            return None;
        }
        self.visible = intersecting;
        if intersecting && trigger.once {
            self.latched = true;
        }
        Some(self.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_trigger_latches_on_first_entry() {
        let trigger = ViewportTrigger::once(80.0);
        let mut vis = Visibility::default();
        assert_eq!(vis.observe(&trigger, false), None);
        assert_eq!(vis.observe(&trigger, true), Some(true));
        assert!(vis.is_latched());
        assert_eq!(vis.observe(&trigger, false), None);
        assert!(vis.is_visible());
    }

    #[test]
    fn repeating_trigger_follows_intersection() {
        let trigger = ViewportTrigger {
            margin_px: 0.0,
            once: false,
        };
        let mut vis = Visibility::default();
        assert_eq!(vis.observe(&trigger, true), Some(true));
        assert_eq!(vis.observe(&trigger, true), None);
        assert_eq!(vis.observe(&trigger, false), Some(false));
    }

    #[test]
    fn root_margin_is_negative() {
        assert_eq!(ViewportTrigger::once(80.0).root_margin(), "-80px");
        assert_eq!(ViewportTrigger::once(-50.0).root_margin(), "-50px");
    }

    #[test]
    fn geometric_fallback_honours_margin() {
        let trigger = ViewportTrigger::once(80.0);
        // Just peeking in at the bottom edge is not enough.
        assert!(!trigger.intersects(850.0, 1200.0, 900.0));
        assert!(trigger.intersects(700.0, 1000.0, 900.0));
        // Scrolled past the top.
        assert!(!trigger.intersects(-400.0, 60.0, 900.0));
    }

    #[test]
    fn geometric_reports_latch_like_observer_reports() {
        let trigger = ViewportTrigger::once(80.0);
        let mut vis = Visibility::default();
        // Element scrolls up from below the fold.
        let frames = [(1200.0, 1500.0), (900.0, 1200.0), (600.0, 900.0), (-900.0, -600.0)];
        let changes: Vec<_> = frames
            .iter()
            .filter_map(|&(top, bottom)| {
                vis.observe(&trigger, trigger.intersects(top, bottom, 900.0))
            })
            .collect();
        assert_eq!(changes, vec![true]);
        assert!(vis.is_latched());
    }
}
