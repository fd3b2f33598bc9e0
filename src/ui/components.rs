// Reusable UI components

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer {
    content: Line<'static>,
}

impl Footer {
    pub fn showcase(version: &str, uptime: String, boot_active: bool) -> Self {
        let status = format!(
            "v{}  |  Uptime: {}  |  Boot: {}  |  ",
            version,
            uptime,
            if boot_active { "running" } else { "paused" }
        );

        let mut spans = vec![Span::raw(status)];

        let controls = [
            ("[←/→]", " Sections"),
            ("[1-9]", " Jump"),
            ("[A]", "ccess"),
            ("[M]", "enu"),
            ("[B]", "oot"),
            ("[Q]", "uit"),
        ];

        for (i, (hotkey, desc)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*hotkey, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(*desc));
        }

        Self {
            content: Line::from(spans),
        }
    }

    pub fn overlay() -> Self {
        let controls = [
            ("[↑/↓]", " Navigate"),
            ("[Enter]", " Select"),
            ("[Esc]", " Close"),
        ];

        let mut spans = vec![Span::raw("CONTROLS: ")];

        for (i, (hotkey, desc)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*hotkey, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(*desc));
        }

        Self {
            content: Line::from(spans),
        }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.content)
            .style(Style::default().bg(Color::DarkGray))
            .render(area, buf);
    }
}

/// hh:mm:ss from whole seconds
pub fn format_uptime(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
