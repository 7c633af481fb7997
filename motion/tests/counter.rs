//! Count-up behaviour across arbitrary targets and frame timings.

use aspire_motion::counter::{Counter, Phase};
use aspire_motion::viewport::{ViewportTrigger, Visibility};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Drive a counter through `frames` (monotonic timestamps) and collect every
/// displayed value.
fn run(counter: &mut Counter, start: f64, frames: &[f64]) -> Vec<u64> {
    counter.trigger(start);
    frames.iter().map(|&t| counter.sample(start + t)).collect()
}

#[test]
fn stats_bar_targets_land_on_their_labels() {
    for (target, suffix, expected) in [
        (24, "+", "24+"),
        (150, "+", "150+"),
        (4, "", "4"),
        (1, "", "1"),
    ] {
        let mut counter = Counter::new(target, suffix);
        run(&mut counter, 0.0, &[16.0, 500.0, 1_999.0, 2_000.0]);
        assert_eq!(counter.display(), expected);
    }
}

#[test]
fn leaving_and_reentering_the_viewport_does_not_restart() {
    let trigger = ViewportTrigger::once(80.0);
    let mut visibility = Visibility::default();
    let mut counter = Counter::new(150, "+");

    let mut now = 0.0;
    for intersecting in [true, false, true, false, true] {
        if visibility.observe(&trigger, intersecting) == Some(true) {
            assert!(counter.trigger(now));
        }
        now += 1_000.0;
        counter.sample(now);
    }

    assert_eq!(counter.display(), "150+");
    assert_eq!(counter.phase(), Phase::Finished);
    assert!(!counter.trigger(now));
}

proptest! {
    #[test]
    fn final_text_is_target_and_suffix(target in 0u64..1_000_000, suffix in "[+%kKM]{0,2}") {
        let mut counter = Counter::new(target, suffix.clone());
        counter.trigger(0.0);
        counter.sample(2_000.0);
        prop_assert_eq!(counter.display(), format!("{target}{suffix}"));
    }

    #[test]
    fn displayed_value_never_decreases(
        target in 0u64..100_000,
        mut steps in proptest::collection::vec(0.0f64..2_500.0, 1..64)
    ) {
        steps.sort_by(f64::total_cmp);
        let mut counter = Counter::new(target, "");
        let values = run(&mut counter, 10.0, &steps);
        for pair in values.windows(2) {
            prop_assert!(pair[0] <= pair[1], "{} then {}", pair[0], pair[1]);
        }
        prop_assert!(values.iter().all(|v| *v <= target));
    }

    #[test]
    fn untriggered_counter_stays_at_zero(target in 0u64..10_000, t in 0.0f64..10_000.0) {
        let mut counter = Counter::new(target, "+");
        prop_assert_eq!(counter.sample(t), 0);
        prop_assert_eq!(counter.display(), "0+");
    }
}
