/// Property-based tests for the step sequencer
///
/// Uses proptest to generate random step-list lengths and tick counts and
/// verify the cursor invariants hold on both the looping and saturating
/// paths.
use launchdeck::sequencer::{StepSequencer, StepStatus};
use proptest::prelude::*;
use std::time::{Duration, Instant};

fn sequencer(len: usize, looped: bool) -> StepSequencer {
    let steps = (0..len).map(|i| format!("step {}", i)).collect();
    StepSequencer::new(steps, Duration::from_millis(100), looped).unwrap()
}

proptest! {
    #[test]
    fn cursor_stays_in_bounds(len in 1usize..32, ticks in 0usize..200, looped: bool) {
        let mut seq = sequencer(len, looped);
        seq.activate(Instant::now());

        for _ in 0..ticks {
            seq.advance();
            let cursor = seq.cursor().unwrap();
            prop_assert!(cursor < len);
        }
    }

    #[test]
    fn looped_run_cycles_back_to_start(len in 1usize..32) {
        let mut seq = sequencer(len, true);
        seq.activate(Instant::now());

        // Exactly `len` ticks from cursor 0 land back on cursor 0
        for _ in 0..len {
            seq.advance();
        }
        prop_assert_eq!(seq.cursor(), Some(0));
    }

    #[test]
    fn saturating_run_holds_last_step(len in 1usize..32, extra in 0usize..64) {
        let mut seq = sequencer(len, false);
        seq.activate(Instant::now());

        for _ in 0..(len - 1 + extra) {
            seq.advance();
        }
        prop_assert_eq!(seq.cursor(), Some(len - 1));
        prop_assert!(seq.is_saturated());
    }

    #[test]
    fn reactivation_always_resets(len in 1usize..32, ticks in 0usize..100, looped: bool) {
        let mut seq = sequencer(len, looped);
        seq.activate(Instant::now());

        for _ in 0..ticks {
            seq.advance();
        }

        seq.deactivate();
        prop_assert_eq!(seq.cursor(), None);

        seq.activate(Instant::now());
        prop_assert_eq!(seq.cursor(), Some(0));
    }

    #[test]
    fn exactly_one_current_step_while_active(len in 1usize..32, ticks in 0usize..100) {
        let mut seq = sequencer(len, true);
        seq.activate(Instant::now());

        for _ in 0..ticks {
            seq.advance();
        }

        let statuses: Vec<StepStatus> =
            (0..len).map(|i| seq.status_of(i).unwrap()).collect();

        let current_count = statuses
            .iter()
            .filter(|s| **s == StepStatus::Current)
            .count();
        prop_assert_eq!(current_count, 1);

        let current_index = statuses
            .iter()
            .position(|s| *s == StepStatus::Current)
            .unwrap();
        prop_assert_eq!(Some(current_index), seq.cursor());

        // Completed steps are a contiguous prefix, upcoming a contiguous
        // suffix
        for (i, status) in statuses.iter().enumerate() {
            match status {
                StepStatus::Completed => prop_assert!(i < current_index),
                StepStatus::Current => prop_assert_eq!(i, current_index),
                StepStatus::Upcoming => prop_assert!(i > current_index),
            }
        }
    }
}
