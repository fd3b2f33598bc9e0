// Snapshot of the classification timeline for a looping three-step run

use insta::assert_snapshot;
use launchdeck::sequencer::{StepSequencer, StepStatus};
use std::time::{Duration, Instant};

fn render_row(seq: &StepSequencer) -> String {
    (0..seq.len())
        .map(|i| {
            let label = &seq.steps()[i];
            match seq.status_of(i) {
                Some(StepStatus::Completed) => format!("[x]{}", label),
                Some(StepStatus::Current) => format!("[>]{}", label),
                Some(StepStatus::Upcoming) => format!("[ ]{}", label),
                None => format!("[?]{}", label),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn three_step_loop_timeline() {
    let mut seq = StepSequencer::new(
        vec!["fetch".to_string(), "verify".to_string(), "launch".to_string()],
        Duration::from_millis(1000),
        true,
    )
    .unwrap();
    seq.activate(Instant::now());

    let mut rows = vec![render_row(&seq)];
    for _ in 0..4 {
        seq.advance();
        rows.push(render_row(&seq));
    }

    assert_snapshot!("three_step_loop_timeline", rows.join("\n"));
}
