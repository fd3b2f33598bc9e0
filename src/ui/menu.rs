// Full-screen navigation overlay

use crate::deck::Deck;
use crate::ui::components::Footer;
use crate::ui::constants::accent_color;
use crate::ui::state::MenuState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

pub struct MenuOverlay;

impl MenuOverlay {
    pub fn render(frame: &mut Frame, deck: &Deck, menu: &mut MenuState) {
        let area = frame.area();

        // Covers the whole screen, like the mobile nav it mirrors
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(format!(" {} ", deck.meta.brand))
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Section list
                Constraint::Length(1), // Footer links
                Constraint::Length(1), // Controls
            ])
            .split(inner);

        let items: Vec<ListItem> = deck
            .sections
            .iter()
            .map(|section| {
                let accent = accent_color(&section.accent);
                ListItem::new(Line::from(vec![
                    Span::styled(
                        section.title.clone(),
                        Style::default().fg(accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(section.tagline.clone(), Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("» ");

        frame.render_stateful_widget(list, chunks[0], &mut menu.list_state);

        if !deck.meta.footer_links.is_empty() {
            let mut spans = Vec::new();
            for (i, link) in deck.meta.footer_links.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled("  ·  ", Style::default().fg(Color::DarkGray)));
                }
                spans.push(Span::styled(
                    link.label.clone(),
                    Style::default().fg(Color::White),
                ));
                spans.push(Span::styled(
                    format!(" {}", link.url),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            frame.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);
        }

        frame.render_widget(Footer::overlay(), chunks[2]);
    }
}
