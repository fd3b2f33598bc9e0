// Section screens - hero copy, product lines, boot-sequence panel

use crate::deck::Section;
use crate::sequencer::CommandTicker;
use crate::ui::constants::{GLYPH_BULLET, GLYPH_PROMPT, accent_color};
use crate::ui::state::AppState;
use crate::ui::widgets::StepList;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub struct SectionView;

impl SectionView {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let section = &state.deck.sections[state.selected_section];
        let accent = accent_color(&section.accent);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" {} ", section.title),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // The docs section links out; everything else is self-contained
        let docs_url = (section.id == "docs" && !state.deck.meta.docs_url.is_empty())
            .then(|| state.deck.meta.docs_url.clone());

        // The first section is the hero: copy on the left, boot panel on
        // the right
        if state.selected_section == 0 {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(inner);

            Self::render_copy(
                frame,
                columns[0],
                section,
                accent,
                state.current_ticker(),
                docs_url,
            );
            Self::render_boot_panel(frame, columns[1], state);
        } else {
            Self::render_copy(
                frame,
                inner,
                section,
                accent,
                state.current_ticker(),
                docs_url,
            );
        }
    }

    fn render_copy(
        frame: &mut Frame,
        area: Rect,
        section: &Section,
        accent: Color,
        ticker: Option<&CommandTicker>,
        docs_url: Option<String>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let mut lines = vec![
            Line::from(Span::styled(
                section.tagline.clone(),
                Style::default().fg(accent).add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
        ];

        for body_line in &section.body {
            lines.push(Line::from(Span::styled(
                body_line.clone(),
                Style::default().fg(Color::White),
            )));
        }

        if !section.bullets.is_empty() {
            lines.push(Line::from(""));
            for bullet in &section.bullets {
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", GLYPH_BULLET), Style::default().fg(accent)),
                    Span::styled(bullet.clone(), Style::default().fg(Color::Gray)),
                ]));
            }
        }

        if let Some(url) = docs_url {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                url,
                Style::default().fg(accent).add_modifier(Modifier::UNDERLINED),
            )));
        }

        let copy = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(copy, chunks[0]);

        if let Some(ticker) = ticker {
            let line = Line::from(vec![
                Span::styled(
                    format!("{} ", GLYPH_PROMPT),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    ticker.current().to_string(),
                    Style::default().fg(accent),
                ),
                Span::styled("▌", Style::default().fg(Color::DarkGray)),
            ]);
            frame.render_widget(Paragraph::new(line), chunks[1]);
        }
    }

    fn render_boot_panel(frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" boot sequence ");

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if state.boot.is_active() {
            frame.render_widget(
                StepList::new(&state.boot, Color::Magenta),
                inner,
            );
        } else {
            let hint = Paragraph::new(Line::from(vec![
                Span::styled("paused · press ", Style::default().fg(Color::DarkGray)),
                Span::styled("[B]", Style::default().fg(Color::Yellow)),
                Span::styled(
                    " to run the boot sequence",
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
            .wrap(Wrap { trim: true });
            frame.render_widget(hint, inner);
        }
    }
}
