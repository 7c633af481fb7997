//! Count-up number that animates once, the first time it is seen.
//!
//! The counter shows `0` followed by its suffix until [`Counter::trigger`] is
//! called, then eases from zero to the target over the configured duration.
//! Displayed values are rounded, never exceed the target, and never go
//! backwards. A second trigger is ignored.

use crate::easing::Easing;
use crate::error::Result;
use crate::tween::Tween;

/// Default count-up duration.
pub const DEFAULT_DURATION_MS: f64 = 2000.0;

/// Lifecycle of a counter run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle,
    Running { started_at: f64 },
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    target: u64,
    suffix: String,
    tween: Tween,
    phase: Phase,
    current: u64,
}

impl Counter {
    pub fn new(target: u64, suffix: impl Into<String>) -> Self {
        Self {
            target,
            suffix: suffix.into(),
            tween: Tween::from_preset(
                0.0,
                target as f64,
                DEFAULT_DURATION_MS,
                Easing::OutExpoLike,
            ),
            phase: Phase::Idle,
            current: 0,
        }
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Result<Self> {
        self.tween = self.tween.with_duration(duration_ms)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.tween = self.tween.with_easing(easing);
        self
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn value(&self) -> u64 {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished)
    }

    /// Start the run at `now_ms`. Returns `false` if the counter has already
    /// been triggered; the run is never restarted.
    pub fn trigger(&mut self, now_ms: f64) -> bool {
        if !matches!(self.phase, Phase::Idle) {
            return false;
        }
        tracing::trace!(to = self.target, "counter started");
        self.phase = if self.target == 0 {
            Phase::Finished
        } else {
            Phase::Running { started_at: now_ms }
        };
        true
    }

    /// Displayed value at `now_ms`.
    pub fn sample(&mut self, now_ms: f64) -> u64 {
        let Phase::Running { started_at } = self.phase else {
            return self.current;
        };

        let elapsed = now_ms - started_at;
        if self.tween.is_complete(elapsed) {
            self.current = self.target;
            self.phase = Phase::Finished;
            tracing::trace!(to = self.target, "counter finished");
            return self.current;
        }

        let rounded = self
            .tween
            .value_at(elapsed)
            .round().clamp(0.0, self.target as f64) as u64;
        self.current = self.current.max(rounded);
        self.current
    }

    /// Current text: value followed by suffix.
    pub fn display(&self) -> String {
        format!("{}{}", self.current, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_zero_until_triggered() {
        let mut counter = Counter::new(24, "+");
        assert_eq!(counter.display(), "0+");
        assert_eq!(counter.sample(5_000.0), 0);
        assert_eq!(counter.phase(), Phase::Idle);
    }

    #[test]
    fn reaches_exact_target_after_duration() {
        let mut counter = Counter::new(150, "+");
        assert!(counter.trigger(1_000.0));
        counter.sample(1_500.0);
        assert!(counter.value() < 150);
        counter.sample(3_000.0);
        assert_eq!(counter.display(), "150+");
        assert!(counter.is_finished());
    }

    #[test]
    fn second_trigger_is_ignored() {
        let mut counter = Counter::new(4, "");
        assert!(counter.trigger(0.0));
        counter.sample(2_500.0);
        assert!(!counter.trigger(10_000.0));
        assert_eq!(counter.sample(10_001.0), 4);
        assert_eq!(counter.display(), "4");
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut counter = Counter::new(0, "x");
        assert!(counter.trigger(0.0));
        assert!(counter.is_finished());
        assert_eq!(counter.display(), "0x");
    }

    #[test]
    fn custom_duration_is_validated() {
        assert!(Counter::new(1, "").with_duration(0.0).is_err());
        let mut counter = Counter::new(10, "").with_duration(100.0).unwrap();
        counter.trigger(0.0);
        assert_eq!(counter.sample(100.0), 10);
    }

    #[test]
    fn linear_easing_passes_through_the_midpoint() {
        let mut counter = Counter::new(100, "")
            .with_duration(1_000.0)
            .unwrap()
            .with_easing(Easing::Linear);
        counter.trigger(0.0);
        assert_eq!(counter.sample(500.0), 50);
        assert_eq!(counter.sample(999.0), 100);
        assert!(!counter.is_finished());
        assert_eq!(counter.sample(1_000.0), 100);
        assert!(counter.is_finished());
    }
}
