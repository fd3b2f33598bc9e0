// Cursor-over-step-list state machine driven by the UI tick loop

use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequencerError {
    #[error("step list must contain at least one step")]
    EmptySteps,

    #[error("advance interval must be greater than zero")]
    ZeroInterval,
}

/// Display classification of a step relative to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Running {
        cursor: usize,
        last_advance: Instant,
    },
}

/// Advances a cursor through a fixed list of step labels on a fixed period.
///
/// The sequencer owns no timer: the host tick loop calls [`poll`] and the
/// cursor moves at most once per call, when `interval` has elapsed since the
/// previous advance. Deactivating drops the pending deadline, so nothing can
/// fire after teardown, and the next activation starts clean at step 0.
///
/// With `looped` set, the cursor wraps from the last step back to 0;
/// otherwise it saturates at the last step.
///
/// [`poll`]: StepSequencer::poll
#[derive(Debug, Clone)]
pub struct StepSequencer {
    steps: Vec<String>,
    interval: Duration,
    looped: bool,
    phase: Phase,
}

impl StepSequencer {
    pub fn new(
        steps: Vec<String>,
        interval: Duration,
        looped: bool,
    ) -> Result<Self, SequencerError> {
        if steps.is_empty() {
            return Err(SequencerError::EmptySteps);
        }
        if interval.is_zero() {
            return Err(SequencerError::ZeroInterval);
        }

        Ok(Self {
            steps,
            interval,
            looped,
            phase: Phase::Idle,
        })
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_looped(&self) -> bool {
        self.looped
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// Current step index, or `None` while idle.
    pub fn cursor(&self) -> Option<usize> {
        match self.phase {
            Phase::Idle => None,
            Phase::Running { cursor, .. } => Some(cursor),
        }
    }

    /// True once a non-looping run has reached the last step.
    pub fn is_saturated(&self) -> bool {
        !self.looped && self.cursor() == Some(self.steps.len() - 1)
    }

    /// Start a fresh run from step 0. No-op if already running.
    pub fn activate(&mut self, now: Instant) {
        if let Phase::Idle = self.phase {
            self.phase = Phase::Running {
                cursor: 0,
                last_advance: now,
            };
        }
    }

    /// Stop and discard progress. The next activation starts at step 0.
    pub fn deactivate(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn set_active(&mut self, active: bool, now: Instant) {
        if active {
            self.activate(now);
        } else {
            self.deactivate();
        }
    }

    /// Apply the advance rule once. Idle sequencers don't move.
    pub fn advance(&mut self) {
        if let Phase::Running { cursor, .. } = &mut self.phase {
            let last = self.steps.len() - 1;
            *cursor = if self.looped {
                if *cursor == last { 0 } else { *cursor + 1 }
            } else {
                (*cursor + 1).min(last)
            };
        }
    }

    /// Drive the sequencer from the host tick loop. Advances at most once
    /// per call; returns whether the cursor moved.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = match self.phase {
            Phase::Running { last_advance, .. } => {
                now.duration_since(last_advance) >= self.interval
            }
            Phase::Idle => false,
        };

        if !due {
            return false;
        }

        self.advance();
        if let Phase::Running { last_advance, .. } = &mut self.phase {
            *last_advance = now;
        }
        true
    }

    /// Classify step `index` against the cursor. `None` while idle or out
    /// of range.
    pub fn status_of(&self, index: usize) -> Option<StepStatus> {
        if index >= self.steps.len() {
            return None;
        }
        let cursor = self.cursor()?;

        Some(if index < cursor {
            StepStatus::Completed
        } else if index == cursor {
            StepStatus::Current
        } else {
            StepStatus::Upcoming
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(labels: &[&str], looped: bool) -> StepSequencer {
        StepSequencer::new(
            labels.iter().map(|s| s.to_string()).collect(),
            Duration::from_millis(1000),
            looped,
        )
        .unwrap()
    }

    #[test]
    fn rejects_empty_steps() {
        let result = StepSequencer::new(Vec::new(), Duration::from_millis(1000), true);
        assert_eq!(result.unwrap_err(), SequencerError::EmptySteps);
    }

    #[test]
    fn rejects_zero_interval() {
        let result = StepSequencer::new(vec!["a".to_string()], Duration::ZERO, true);
        assert_eq!(result.unwrap_err(), SequencerError::ZeroInterval);
    }

    #[test]
    fn idle_until_activated() {
        let mut s = seq(&["a", "b"], true);
        assert!(!s.is_active());
        assert_eq!(s.cursor(), None);

        s.advance();
        assert_eq!(s.cursor(), None);

        s.activate(Instant::now());
        assert_eq!(s.cursor(), Some(0));
    }

    #[test]
    fn looped_advance_wraps() {
        let mut s = seq(&["a", "b", "c"], true);
        s.activate(Instant::now());

        s.advance();
        assert_eq!(s.cursor(), Some(1));
        s.advance();
        assert_eq!(s.cursor(), Some(2));
        s.advance();
        assert_eq!(s.cursor(), Some(0));
    }

    #[test]
    fn unlooped_advance_saturates() {
        let mut s = seq(&["a", "b", "c"], false);
        s.activate(Instant::now());

        s.advance();
        s.advance();
        assert_eq!(s.cursor(), Some(2));
        assert!(s.is_saturated());

        s.advance();
        assert_eq!(s.cursor(), Some(2));
    }

    #[test]
    fn deactivate_resets_cursor() {
        let mut s = seq(&["a", "b", "c"], true);
        s.activate(Instant::now());
        s.advance();
        s.advance();
        assert_eq!(s.cursor(), Some(2));

        s.deactivate();
        assert_eq!(s.cursor(), None);

        s.activate(Instant::now());
        assert_eq!(s.cursor(), Some(0));
    }

    #[test]
    fn poll_respects_interval() {
        let mut s = seq(&["a", "b"], true);
        let start = Instant::now();
        s.activate(start);

        assert!(!s.poll(start + Duration::from_millis(500)));
        assert_eq!(s.cursor(), Some(0));

        assert!(s.poll(start + Duration::from_millis(1000)));
        assert_eq!(s.cursor(), Some(1));

        // A late poll still advances only once
        assert!(s.poll(start + Duration::from_millis(4500)));
        assert_eq!(s.cursor(), Some(0));
    }

    #[test]
    fn exactly_one_current_step() {
        let mut s = seq(&["a", "b", "c", "d"], true);
        s.activate(Instant::now());
        s.advance();
        s.advance();

        let statuses: Vec<_> = (0..s.len()).map(|i| s.status_of(i).unwrap()).collect();
        assert_eq!(
            statuses,
            vec![
                StepStatus::Completed,
                StepStatus::Completed,
                StepStatus::Current,
                StepStatus::Upcoming,
            ]
        );
    }

    #[test]
    fn status_none_when_idle_or_out_of_range() {
        let mut s = seq(&["a", "b"], true);
        assert_eq!(s.status_of(0), None);

        s.activate(Instant::now());
        assert_eq!(s.status_of(0), Some(StepStatus::Current));
        assert_eq!(s.status_of(2), None);
    }
}
