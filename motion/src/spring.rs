//! Damped spring used to smooth values that chase a moving target
//! (scroll progress, magnetic button offsets).

use crate::error::{MotionError, Result};

/// Largest integration step. Frames longer than this are split.
const MAX_SUBSTEP_MS: f64 = 8.0;
/// Frames longer than this (tab in background, debugger pause) are capped.
const MAX_FRAME_MS: f64 = 64.0;

/// Physical parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance to target under which the spring may settle.
    pub rest_delta: f64,
    /// Speed (units per second) under which the spring may settle.
    pub rest_speed: f64,
}

/// Scroll progress bar smoothing.
pub const SCROLL_PROGRESS: SpringConfig = SpringConfig {
    stiffness: 80.0,
    damping: 30.0,
    mass: 1.0,
    rest_delta: 0.001,
    rest_speed: 0.01,
};

/// Magnetic button follow.
pub const MAGNETIC: SpringConfig = SpringConfig {
    stiffness: 250.0,
    damping: 18.0,
    mass: 1.0,
    rest_delta: 0.01,
    rest_speed: 0.01,
};

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }
}

impl SpringConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(MotionError::InvalidSpring {
                field: "stiffness",
                value: self.stiffness,
            });
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(MotionError::InvalidSpring {
                field: "mass",
                value: self.mass,
            });
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(MotionError::InvalidSpring {
                field: "damping",
                value: self.damping,
            });
        }
        if !(self.rest_delta.is_finite() && self.rest_delta >= 0.0) {
            return Err(MotionError::InvalidSpring {
                field: "rest_delta",
                value: self.rest_delta,
            });
        }
        if !(self.rest_speed.is_finite() && self.rest_speed >= 0.0) {
            return Err(MotionError::InvalidSpring {
                field: "rest_speed",
                value: self.rest_speed,
            });
        }
        Ok(())
    }
}

/// A one-dimensional spring chasing `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            position: initial,
            velocity: 0.0,
            target: initial,
        })
    }

    /// Scroll progress spring resting at zero.
    pub const fn scroll_progress() -> Self {
        Self::from_preset(SCROLL_PROGRESS, 0.0)
    }

    /// Magnetic follow spring resting at zero.
    pub const fn magnetic() -> Self {
        Self::from_preset(MAGNETIC, 0.0)
    }

    /// Construct from a preset known to be valid.
    pub(crate) const fn from_preset(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.position).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
    }

    /// Advance the simulation by `dt_ms` and return the new position.
    pub fn step(&mut self, dt_ms: f64) -> f64 {
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
            return self.position;
        }

        let mut remaining = dt_ms.clamp(0.0, MAX_FRAME_MS);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP_MS);
            let dt = h / 1000.0;
            let displacement = self.position - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * dt;
            self.position += self.velocity * dt;
            remaining -= h;
        }

        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.step(16.0);
        }
    }

    #[test]
    fn settles_exactly_on_target() {
        let mut spring = Spring::new(SCROLL_PROGRESS, 0.0).unwrap();
        spring.set_target(1.0);
        settle(&mut spring, 600);
        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), 1.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn overdamped_scroll_spring_never_overshoots() {
        // damping 30 > 2 * sqrt(80): critically overdamped
        let mut spring = Spring::new(SCROLL_PROGRESS, 0.0).unwrap();
        spring.set_target(1.0);
        for _ in 0..600 {
            assert!(spring.step(16.0) <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn magnetic_spring_returns_to_origin() {
        let mut spring = Spring::new(MAGNETIC, 0.0).unwrap();
        spring.set_target(12.0);
        settle(&mut spring, 10);
        assert!(spring.position() > 0.0);
        spring.set_target(0.0);
        settle(&mut spring, 400);
        assert_eq!(spring.position(), 0.0);
    }

    #[test]
    fn huge_frames_are_capped() {
        let mut spring = Spring::new(MAGNETIC, 0.0).unwrap();
        spring.set_target(10.0);
        let p = spring.step(10_000.0);
        assert!(p.is_finite());
        assert!(p < 10.0 * 2.0);
    }

    #[test]
    fn rejects_invalid_parameters() {
        let bad = SpringConfig {
            stiffness: 0.0,
            ..SpringConfig::default()
        };
        assert_eq!(
            Spring::new(bad, 0.0).unwrap_err(),
            MotionError::InvalidSpring {
                field: "stiffness",
                value: 0.0
            }
        );

        let bad = SpringConfig {
            damping: -1.0,
            ..SpringConfig::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn rejects_rest_speed_that_could_never_settle() {
        for rest_speed in [-0.5, f64::NAN, f64::INFINITY] {
            let bad = SpringConfig {
                rest_speed,
                ..SCROLL_PROGRESS
            };
            assert!(matches!(
                bad.validate(),
                Err(MotionError::InvalidSpring {
                    field: "rest_speed",
                    ..
                })
            ));
        }
    }
}
