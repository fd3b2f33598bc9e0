// Access-request modal

use crate::ui::state::{AccessModalState, AccessPhase};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub struct AccessModal;

impl AccessModal {
    pub fn render(frame: &mut Frame, state: &AccessModalState) {
        let area = frame.area();

        // Small centered modal
        let modal_width = 56.min(area.width.saturating_sub(4));
        let modal_height = 14.min(area.height.saturating_sub(2));

        let modal_area = Rect {
            x: (area.width.saturating_sub(modal_width)) / 2,
            y: (area.height.saturating_sub(modal_height)) / 2,
            width: modal_width,
            height: modal_height,
        };

        // Clear background
        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Request Access ")
            .title_alignment(Alignment::Center)
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        match state.phase {
            AccessPhase::Editing => Self::render_form(frame, inner, state),
            AccessPhase::Submitting { .. } => Self::render_submitting(frame, inner),
            AccessPhase::Submitted { .. } => Self::render_submitted(frame, inner),
        }
    }

    fn render_form(frame: &mut Frame, inner: Rect, state: &AccessModalState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Intro copy
                Constraint::Length(1), // Email label
                Constraint::Length(3), // Email input
                Constraint::Length(1), // Validation error
                Constraint::Length(1),
                Constraint::Length(1), // Buttons
                Constraint::Min(0),    // Terms footnote
            ])
            .split(inner);

        let intro = Paragraph::new("Join the waitlist to get early access to the agent ecosystem.")
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true });
        frame.render_widget(intro, chunks[0]);

        frame.render_widget(
            Paragraph::new("Email").style(Style::default().fg(Color::White)),
            chunks[1],
        );

        frame.render_widget(&state.email, chunks[2]);

        if let Some(error) = &state.error {
            let line = Line::from(vec![
                Span::styled("⚠ ", Style::default().fg(Color::Red)),
                Span::styled(error.clone(), Style::default().fg(Color::Red)),
            ]);
            frame.render_widget(Paragraph::new(line), chunks[3]);
        }

        let buttons = Line::from(vec![
            Span::styled(
                "[Enter]",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Submit   "),
            Span::styled(
                "[Esc]",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Cancel"),
        ]);
        frame.render_widget(
            Paragraph::new(buttons).alignment(Alignment::Center),
            chunks[5],
        );

        let terms = Paragraph::new("By submitting, you agree to our Terms of Service.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(terms, chunks[6]);
    }

    fn render_submitting(frame: &mut Frame, inner: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "Processing...",
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(
                "Recording your request.",
                Style::default().fg(Color::Gray),
            )),
        ];

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            inner,
        );
    }

    fn render_submitted(frame: &mut Frame, inner: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "✔ Thank You!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "We've received your request.",
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(
                "We'll be in touch soon.",
                Style::default().fg(Color::Gray),
            )),
        ];

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            inner,
        );
    }
}
