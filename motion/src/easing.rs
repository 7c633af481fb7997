//! Easing curves.
//!
//! Every animation on the page uses the same `cubic-bezier(0.16, 1, 0.3, 1)`
//! curve: a fast start that settles softly. [`CubicBezier`] solves the curve
//! the same way browsers do (Newton-Raphson with a bisection fallback), so the
//! numbers we drive from Rust match the CSS transitions running next to them.

use crate::error::{MotionError, Result};

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_MIN_SLOPE: f64 = 1e-6;
const SOLVE_EPSILON: f64 = 1e-7;
const BISECTION_ITERATIONS: usize = 32;

/// A CSS-style cubic bezier with fixed endpoints `(0, 0)` and `(1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

/// `cubic-bezier(0.16, 1, 0.3, 1)` - the house curve.
pub const EASE_OUT_EXPO_LIKE: CubicBezier = CubicBezier {
    x1: 0.16,
    y1: 1.0,
    x2: 0.3,
    y2: 1.0,
};

/// CSS `ease`, used where no curve is given.
pub const CSS_EASE: CubicBezier = CubicBezier {
    x1: 0.25,
    y1: 0.1,
    x2: 0.25,
    y2: 1.0,
};

impl CubicBezier {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self> {
        for (axis, value) in [("x1", x1), ("x2", x2)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(MotionError::InvalidControlPoint { axis, value });
            }
        }
        for (axis, value) in [("y1", y1), ("y2", y2)] {
            if !value.is_finite() {
                return Err(MotionError::InvalidControlPoint { axis, value });
            }
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// CSS `transition-timing-function` value for this curve.
    pub fn to_css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }

    /// Eased progress for linear progress `t` (clamped to `[0, 1]`).
    pub fn apply(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let s = self.solve_x(t);
        sample(self.y1, self.y2, s)
    }

    fn solve_x(&self, x: f64) -> f64 {
        let mut s = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = sample(self.x1, self.x2, s) - x;
            if err.abs() < SOLVE_EPSILON {
                return s;
            }
            let slope = slope(self.x1, self.x2, s);
            if slope.abs() < NEWTON_MIN_SLOPE {
                break;
            }
            s -= err / slope;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        s = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = sample(self.x1, self.x2, s);
            if (value - x).abs() < SOLVE_EPSILON {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) * 0.5;
        }
        s
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        EASE_OUT_EXPO_LIKE
    }
}

// Bernstein form with p0 = 0 and p3 = 1.
fn sample(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn slope(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Timing function selector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    #[default]
    OutExpoLike,
    Bezier(CubicBezier),
}

impl Easing {
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t.clamp(0.0, 1.0),
            Easing::OutExpoLike => EASE_OUT_EXPO_LIKE.apply(t),
            Easing::Bezier(curve) => curve.apply(t),
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_owned(),
            Easing::OutExpoLike => EASE_OUT_EXPO_LIKE.to_css(),
            Easing::Bezier(curve) => curve.to_css(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        assert_eq!(EASE_OUT_EXPO_LIKE.apply(0.0), 0.0);
        assert_eq!(EASE_OUT_EXPO_LIKE.apply(1.0), 1.0);
        assert_eq!(EASE_OUT_EXPO_LIKE.apply(-3.0), 0.0);
        assert_eq!(EASE_OUT_EXPO_LIKE.apply(7.0), 1.0);
    }

    #[test]
    fn house_curve_front_loads_progress() {
        // Most of the distance is covered in the first fifth of the time.
        assert!(EASE_OUT_EXPO_LIKE.apply(0.2) > 0.6);
        assert!(EASE_OUT_EXPO_LIKE.apply(0.5) > 0.9);
    }

    #[test]
    fn house_curve_is_monotonic() {
        let mut last = 0.0;
        for i in 0..=1000 {
            let y = EASE_OUT_EXPO_LIKE.apply(f64::from(i) / 1000.0);
            assert!(y + 1e-6 >= last, "dropped at step {i}: {y} < {last}");
            last = y;
        }
    }

    #[test]
    fn linear_bezier_matches_identity() {
        let curve = CubicBezier::new(0.0, 0.0, 1.0, 1.0).unwrap();
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            assert!((curve.apply(t) - t).abs() < 1e-5);
        }
    }

    #[test]
    fn rejects_x_outside_unit_interval() {
        let err = CubicBezier::new(1.2, 0.0, 0.5, 1.0).unwrap_err();
        assert_eq!(
            err,
            MotionError::InvalidControlPoint {
                axis: "x1",
                value: 1.2
            }
        );
        assert!(CubicBezier::new(0.2, 0.0, -0.1, 1.0).is_err());
    }

    #[test]
    fn y_may_overshoot() {
        assert!(CubicBezier::new(0.34, 1.56, 0.64, 1.0).is_ok());
    }

    #[test]
    fn css_rendering() {
        assert_eq!(EASE_OUT_EXPO_LIKE.to_css(), "cubic-bezier(0.16, 1, 0.3, 1)");
        assert_eq!(Easing::Linear.to_css(), "linear");
    }
}
