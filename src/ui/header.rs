// Header bar - brand and accent-colored section tabs

use crate::ui::constants::accent_color;
use crate::ui::state::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut spans = vec![Span::styled(
            state.deck.meta.brand.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )];

        if !state.deck.meta.tagline.is_empty() {
            spans.push(Span::styled(
                format!(" · {}", state.deck.meta.tagline),
                Style::default().fg(Color::DarkGray),
            ));
        }

        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));

        for (i, section) in state.deck.sections.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }

            let accent = accent_color(&section.accent);
            let style = if i == state.selected_section {
                Style::default()
                    .fg(accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };

            spans.push(Span::styled(section.title.clone(), style));
        }

        spans.push(Span::styled(
            "    [A] Request Access",
            Style::default().fg(Color::DarkGray),
        ));

        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    }
}
