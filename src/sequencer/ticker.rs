// Looping rotator for the terminal-style command lines in product sections

use std::time::{Duration, Instant};

use super::{SequencerError, StepSequencer};

/// Cycles through a list of command strings on a fixed period.
///
/// A permanently-active, always-looping [`StepSequencer`]: product sections
/// use one each to rotate their status line.
#[derive(Debug, Clone)]
pub struct CommandTicker {
    seq: StepSequencer,
}

impl CommandTicker {
    pub fn new(
        commands: Vec<String>,
        interval: Duration,
        now: Instant,
    ) -> Result<Self, SequencerError> {
        let mut seq = StepSequencer::new(commands, interval, true)?;
        seq.activate(now);
        Ok(Self { seq })
    }

    pub fn current(&self) -> &str {
        let cursor = self.seq.cursor().unwrap_or(0);
        &self.seq.steps()[cursor]
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        self.seq.poll(now)
    }
}
