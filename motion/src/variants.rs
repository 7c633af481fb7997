//! Entrance variants: how an element looks before it is revealed and how it
//! transitions to rest.
//!
//! Each variant renders to an inline style string. The hidden and visible
//! styles carry the same `transition`, so flipping an element from one to the
//! other lets the browser run the animation.

use crate::easing::{CSS_EASE, EASE_OUT_EXPO_LIKE, Easing};

/// Which end of the variant to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

impl RevealState {
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            RevealState::Visible
        } else {
            RevealState::Hidden
        }
    }
}

/// Hidden-state offsets plus timing for one entrance effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantSpec {
    pub name: &'static str,
    pub x_px: f64,
    pub y_px: f64,
    pub scale: f64,
    pub rotate_x_deg: f64,
    pub duration_s: f64,
    /// Extra delay per `custom` index, e.g. `i * 0.1s`.
    pub custom_step_s: f64,
    pub easing: Easing,
}

impl VariantSpec {
    const fn base(name: &'static str, duration_s: f64, custom_step_s: f64) -> Self {
        Self {
            name,
            x_px: 0.0,
            y_px: 0.0,
            scale: 1.0,
            rotate_x_deg: 0.0,
            duration_s,
            custom_step_s,
            easing: Easing::Bezier(EASE_OUT_EXPO_LIKE),
        }
    }

    pub const fn fade_up(y_px: f64, duration_s: f64, custom_step_s: f64) -> Self {
        let mut spec = Self::base("fade-up", duration_s, custom_step_s);
        spec.y_px = y_px;
        spec
    }

    pub const fn fade_in(duration_s: f64, custom_step_s: f64) -> Self {
        let mut spec = Self::base("fade-in", duration_s, custom_step_s);
        spec.easing = Easing::Bezier(CSS_EASE);
        spec
    }

    pub const fn scale_in(scale: f64, duration_s: f64, custom_step_s: f64) -> Self {
        let mut spec = Self::base("scale-in", duration_s, custom_step_s);
        spec.scale = scale;
        spec
    }

    pub const fn slide(x_px: f64, duration_s: f64) -> Self {
        let name = if x_px < 0.0 { "slide-left" } else { "slide-right" };
        let mut spec = Self::base(name, duration_s, 0.0);
        spec.x_px = x_px;
        spec
    }

    #[must_use]
    pub const fn with_rotate_x(mut self, deg: f64) -> Self {
        self.rotate_x_deg = deg;
        self
    }

    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Delay contributed by the variant's own `custom` index.
    pub fn custom_delay(&self, custom: usize) -> f64 {
        custom as f64 * self.custom_step_s
    }

    fn hidden_transform(&self) -> String {
        let mut parts = Vec::new();
        if self.x_px != 0.0 || self.y_px != 0.0 {
            parts.push(format!("translate3d({}px, {}px, 0)", self.x_px, self.y_px));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if self.rotate_x_deg != 0.0 {
            parts.push(format!("rotateX({}deg)", self.rotate_x_deg));
        }
        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(" ")
        }
    }

    pub fn transition(&self, delay_s: f64) -> String {
        let ease = self.easing.to_css();
        format!(
            "opacity {d}s {ease} {delay}s, transform {d}s {ease} {delay}s",
            d = round_ms(self.duration_s),
            delay = round_ms(delay_s),
        )
    }

    /// Inline style for `state` with the transition starting after `delay_s`.
    pub fn style(&self, state: RevealState, delay_s: f64) -> String {
        let (opacity, transform) = match state {
            RevealState::Hidden => ("0".to_owned(), self.hidden_transform()),
            RevealState::Visible => ("1".to_owned(), "none".to_owned()),
        };
        format!(
            "opacity: {opacity}; transform: {transform}; transition: {};",
            self.transition(delay_s)
        )
    }
}

// Keeps float noise like 0.30000000000000004 out of the CSS.
fn round_ms(seconds: f64) -> f64 {
    (seconds * 1000.0).round() / 1000.0
}

/// Orchestration for a group of reveals that enter together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub step_s: f64,
    pub delay_children_s: f64,
}

impl Stagger {
    pub const NONE: Stagger = Stagger {
        step_s: 0.0,
        delay_children_s: 0.0,
    };

    pub const fn new(step_s: f64, delay_children_s: f64) -> Self {
        Self {
            step_s,
            delay_children_s,
        }
    }

    /// Delay for the child at position `order` whose variant has its own
    /// `custom` index.
    pub fn delay_for(&self, order: usize, spec: &VariantSpec, custom: usize) -> f64 {
        self.delay_children_s + order as f64 * self.step_s + spec.custom_delay(custom)
    }
}

impl Default for Stagger {
    fn default() -> Self {
        Self::NONE
    }
}

/// Timings for the "Version A" presentation.
pub mod version_a {
    use super::{Stagger, VariantSpec};

    pub const FADE_UP: VariantSpec = VariantSpec::fade_up(50.0, 0.8, 0.1);
    pub const FADE_IN: VariantSpec = VariantSpec::fade_in(0.6, 0.08);
    pub const SCALE_IN: VariantSpec = VariantSpec::scale_in(0.9, 0.7, 0.1);
    pub const SLIDE_LEFT: VariantSpec = VariantSpec::slide(-60.0, 0.8);
    pub const SLIDE_RIGHT: VariantSpec = VariantSpec::slide(60.0, 0.8);
    /// Header drops in from above after first paint.
    pub const HEADER: VariantSpec = VariantSpec::fade_up(-100.0, 0.8, 0.0);
    pub const HEADER_DELAY_S: f64 = 0.3;
    /// "SCROLL" cue at the bottom of the hero.
    pub const SCROLL_CUE: VariantSpec = VariantSpec::fade_in(1.0, 0.0);
    pub const SCROLL_CUE_DELAY_S: f64 = 2.2;

    pub const STAGGER: Stagger = Stagger::new(0.12, 0.05);
}

/// Timings for the "Version B" presentation.
pub mod version_b {
    use super::{Stagger, VariantSpec};

    pub const FADE_UP: VariantSpec = VariantSpec::fade_up(40.0, 0.7, 0.1);
    pub const FADE_IN: VariantSpec = VariantSpec::fade_in(0.5, 0.08);
    pub const SCALE_IN: VariantSpec = VariantSpec::scale_in(0.92, 0.6, 0.1);
    pub const TOP_BAR: VariantSpec = VariantSpec::fade_up(-30.0, 0.6, 0.0);
    pub const TOP_BAR_DELAY_S: f64 = 0.1;
    pub const INFO_BAR: VariantSpec = VariantSpec::fade_in(0.5, 0.0);
    pub const INFO_BAR_DELAY_S: f64 = 0.3;

    pub const STAGGER: Stagger = Stagger::new(0.1, 0.05);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hidden_fade_up_is_translated_and_transparent() {
        let style = version_a::FADE_UP.style(RevealState::Hidden, 0.0);
        assert_eq!(
            style,
            "opacity: 0; transform: translate3d(0px, 50px, 0); \
             transition: opacity 0.8s cubic-bezier(0.16, 1, 0.3, 1) 0s, \
             transform 0.8s cubic-bezier(0.16, 1, 0.3, 1) 0s;"
        );
    }

    #[test]
    fn visible_state_rests_at_identity() {
        let style = version_b::SCALE_IN.style(RevealState::Visible, 0.2);
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.contains("0.6s"));
        assert!(style.contains("0.2s"));
    }

    #[test]
    fn fade_in_has_no_transform() {
        let style = version_a::FADE_IN.style(RevealState::Hidden, 0.0);
        assert!(style.contains("transform: none"));
        assert!(style.contains("cubic-bezier(0.25, 0.1, 0.25, 1)"));
    }

    #[test]
    fn scale_and_slide_render_their_offsets() {
        let scaled = version_a::SCALE_IN.style(RevealState::Hidden, 0.0);
        assert!(scaled.contains("scale(0.9)"));
        let slid = version_a::SLIDE_LEFT.style(RevealState::Hidden, 0.0);
        assert!(slid.contains("translate3d(-60px, 0px, 0)"));
        assert_eq!(version_a::SLIDE_RIGHT.name, "slide-right");
    }

    #[test]
    fn stagger_combines_order_and_custom_index() {
        let stagger = version_a::STAGGER;
        let delay = stagger.delay_for(2, &version_a::FADE_UP, 3);
        // 0.05 + 2 * 0.12 + 3 * 0.1
        assert!((delay - 0.59).abs() < 1e-9);
        assert_eq!(Stagger::NONE.delay_for(0, &version_b::FADE_IN, 0), 0.0);
    }

    #[test]
    fn delays_are_rounded_to_milliseconds() {
        let transition = version_b::FADE_UP.transition(0.1 + 0.2);
        assert!(transition.contains(" 0.3s"));
        assert!(!transition.contains("0.30000000000000004"));
    }
}
