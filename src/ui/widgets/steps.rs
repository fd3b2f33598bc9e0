// Boot-sequence step list with per-step visual states

use crate::sequencer::{StepSequencer, StepStatus};
use crate::ui::constants::{GLYPH_STEP_DONE, GLYPH_STEP_UPCOMING};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StepList<'a> {
    sequencer: &'a StepSequencer,
    accent: Color,
}

impl<'a> StepList<'a> {
    pub fn new(sequencer: &'a StepSequencer, accent: Color) -> Self {
        Self { sequencer, accent }
    }

    fn line_for(&self, index: usize) -> Line<'a> {
        let label = self.sequencer.steps()[index].as_str();

        match self.sequencer.status_of(index) {
            Some(StepStatus::Current) => Line::from(vec![
                Span::styled(
                    GLYPH_STEP_DONE,
                    Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    label,
                    Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
                ),
            ]),
            Some(StepStatus::Completed) => Line::from(vec![
                Span::styled(GLYPH_STEP_DONE, Style::default().fg(Color::Gray)),
                Span::raw(" "),
                Span::styled(label, Style::default().fg(Color::Gray)),
            ]),
            // Upcoming, or idle (no cursor)
            _ => Line::from(vec![
                Span::styled(GLYPH_STEP_UPCOMING, Style::default().fg(Color::DarkGray)),
                Span::raw(" "),
                Span::styled(label, Style::default().fg(Color::DarkGray)),
            ]),
        }
    }
}

impl Widget for StepList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        // Display order is reversed (first logical step at the bottom);
        // remap each row back to its logical index for classification
        let len = self.sequencer.len();

        for row in 0..(area.height as usize).min(len) {
            let logical = len - 1 - row;
            let line = self.line_for(logical);
            buf.set_line(area.x, area.y + row as u16, &line, area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::{Duration, Instant};

    fn sequencer(labels: &[&str]) -> StepSequencer {
        StepSequencer::new(
            labels.iter().map(|s| s.to_string()).collect(),
            Duration::from_millis(1000),
            true,
        )
        .unwrap()
    }

    fn rendered_rows(seq: &StepSequencer) -> Vec<String> {
        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(StepList::new(seq, Color::Blue), frame.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        (0..3)
            .map(|y| {
                (0..20)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn renders_reversed_with_remapped_indices() {
        let mut seq = sequencer(&["alpha", "beta", "gamma"]);
        seq.activate(Instant::now());
        seq.advance();

        let rows = rendered_rows(&seq);

        // Logical last step on top, first step at the bottom
        assert_eq!(rows[0], format!("{} gamma", GLYPH_STEP_UPCOMING));
        assert_eq!(rows[1], format!("{} beta", GLYPH_STEP_DONE));
        assert_eq!(rows[2], format!("{} alpha", GLYPH_STEP_DONE));
    }

    #[test]
    fn idle_sequencer_renders_all_upcoming() {
        let seq = sequencer(&["alpha", "beta", "gamma"]);
        let rows = rendered_rows(&seq);

        for row in rows {
            assert!(row.starts_with(GLYPH_STEP_UPCOMING));
        }
    }
}
