//! Time-based interpolation between two numbers.

use crate::easing::Easing;
use crate::error::{MotionError, Result};

/// A fixed-duration interpolation from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration_ms: f64,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Result<Self> {
        validate_duration(duration_ms)?;
        Ok(Self {
            from,
            to,
            duration_ms,
            easing: Easing::default(),
        })
    }

    /// Construct from a duration known to be valid.
    pub(crate) const fn from_preset(from: f64, to: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
        }
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Result<Self> {
        validate_duration(duration_ms)?;
        self.duration_ms = duration_ms;
        Ok(self)
    }

    /// Linear progress in `[0, 1]` after `elapsed_ms`.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Interpolated value after `elapsed_ms`. Exactly `to` once the duration
    /// has passed.
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let t = self.progress(elapsed_ms);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

pub fn validate_duration(duration_ms: f64) -> Result<()> {
    if duration_ms.is_finite() && duration_ms > 0.0 {
        Ok(())
    } else {
        Err(MotionError::InvalidDuration(duration_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_before_start_and_after_end() {
        let tween = Tween::new(10.0, 20.0, 500.0).unwrap();
        assert_eq!(tween.value_at(-100.0), 10.0);
        assert_eq!(tween.value_at(500.0), 20.0);
        assert_eq!(tween.value_at(10_000.0), 20.0);
    }

    #[test]
    fn linear_midpoint() {
        let tween = Tween::new(0.0, 100.0, 1000.0)
            .unwrap()
            .with_easing(Easing::Linear);
        assert!((tween.value_at(250.0) - 25.0).abs() < 1e-9);
        assert!(!tween.is_complete(999.0));
        assert!(tween.is_complete(1000.0));
    }

    #[test]
    fn rejects_bad_durations() {
        assert_eq!(
            Tween::new(0.0, 1.0, 0.0).unwrap_err(),
            MotionError::InvalidDuration(0.0)
        );
        assert!(Tween::new(0.0, 1.0, -5.0).is_err());
        assert!(Tween::new(0.0, 1.0, f64::NAN).is_err());
        assert!(Tween::new(0.0, 1.0, f64::INFINITY).is_err());
        let tween = Tween::new(0.0, 1.0, 10.0).unwrap();
        assert!(tween.with_duration(-1.0).is_err());
        assert!(tween.with_duration(20.0).unwrap().value_at(10.0) < 1.0);
    }
}
