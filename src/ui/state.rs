// Application state management

use crate::config::Config;
use crate::deck::Deck;
use crate::sequencer::{CommandTicker, SequencerError, StepSequencer};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, ListState};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tui_textarea::TextArea;

/// How long the thank-you phase stays up before the modal dismisses itself
pub const SUBMITTED_DISMISS: Duration = Duration::from_secs(3);

/// State for the full-screen navigation overlay
#[derive(Debug)]
pub struct MenuState {
    pub list_state: ListState,
}

impl MenuState {
    pub fn new(selected: usize) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self { list_state }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPhase {
    /// Email field focused, awaiting submit
    Editing,
    /// Simulated submission in flight
    Submitting { since: Instant },
    /// Request recorded; auto-dismisses after [`SUBMITTED_DISMISS`]
    Submitted { since: Instant },
}

pub struct AccessModalState {
    pub email: TextArea<'static>,
    pub phase: AccessPhase,
    pub error: Option<String>,
}

impl AccessModalState {
    pub fn new() -> Self {
        let mut email = TextArea::default();
        email.set_placeholder_text("your@email.com");
        email.set_cursor_line_style(Style::default());
        email.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ratatui::style::Color::Gray)),
        );

        Self {
            email,
            phase: AccessPhase::Editing,
            error: None,
        }
    }

    /// The email field is a single line; joining guards against stray input.
    pub fn email_text(&self) -> String {
        self.email.lines().join("")
    }
}

impl Default for AccessModalState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AppState {
    pub deck: Deck,
    pub selected_section: usize,

    /// The boot-sequence animator shown on the home section
    pub boot: StepSequencer,

    /// One rotating command line per section, where the deck defines one.
    /// Indexed in parallel with `deck.sections`.
    pub tickers: Vec<Option<CommandTicker>>,

    pub menu: Option<MenuState>,
    pub access_modal: Option<AccessModalState>,

    pub submit_delay: Duration,
    pub waitlist_path: Option<PathBuf>,

    pub viewport: Rect,
    pub start_time: Instant,
    pub app_version: String,
}

impl AppState {
    /// Build runtime state from a validated deck, applying config overrides
    /// to the deck's intervals and loop flag.
    pub fn new(deck: Deck, config: &Config, now: Instant) -> Result<Self, SequencerError> {
        let step_interval = config
            .defaults
            .step_interval_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| deck.boot_interval());
        let looped = config.defaults.loop_boot.unwrap_or(deck.boot.looped);

        let boot = StepSequencer::new(deck.boot.steps.clone(), step_interval, looped)?;

        let mut tickers = Vec::with_capacity(deck.sections.len());
        for section in &deck.sections {
            let ticker = match &section.ticker {
                Some(t) => {
                    let interval = config
                        .defaults
                        .ticker_interval_ms
                        .map(Duration::from_millis)
                        .unwrap_or_else(|| t.interval());
                    Some(CommandTicker::new(t.commands.clone(), interval, now)?)
                }
                None => None,
            };
            tickers.push(ticker);
        }

        Ok(Self {
            deck,
            selected_section: 0,
            boot,
            tickers,
            menu: None,
            access_modal: None,
            submit_delay: Duration::from_millis(config.defaults.submit_delay_ms),
            waitlist_path: None,
            viewport: Rect::default(),
            start_time: now,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    pub fn section_count(&self) -> usize {
        self.deck.sections.len()
    }

    pub fn select_next_section(&mut self) {
        self.selected_section = (self.selected_section + 1) % self.section_count();
    }

    pub fn select_prev_section(&mut self) {
        let count = self.section_count();
        self.selected_section = (self.selected_section + count - 1) % count;
    }

    pub fn select_section(&mut self, index: usize) {
        if index < self.section_count() {
            self.selected_section = index;
        }
    }

    /// Ticker for the currently selected section, if it has one.
    pub fn current_ticker(&self) -> Option<&CommandTicker> {
        self.tickers.get(self.selected_section)?.as_ref()
    }

    pub fn overlay_open(&self) -> bool {
        self.menu.is_some() || self.access_modal.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(
            Deck::builtin().unwrap(),
            &Config::default(),
            Instant::now(),
        )
        .unwrap()
    }

    #[test]
    fn section_navigation_wraps() {
        let mut s = state();
        let count = s.section_count();
        assert_eq!(s.selected_section, 0);

        s.select_prev_section();
        assert_eq!(s.selected_section, count - 1);

        s.select_next_section();
        assert_eq!(s.selected_section, 0);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut s = state();
        s.select_section(usize::MAX);
        assert_eq!(s.selected_section, 0);
    }

    #[test]
    fn config_overrides_deck_intervals() {
        let mut config = Config::default();
        config.defaults.step_interval_ms = Some(250);
        config.defaults.loop_boot = Some(false);

        let s = AppState::new(Deck::builtin().unwrap(), &config, Instant::now()).unwrap();
        assert_eq!(s.boot.interval(), Duration::from_millis(250));
        assert!(!s.boot.is_looped());
    }

    #[test]
    fn tickers_line_up_with_sections() {
        let s = state();
        assert_eq!(s.tickers.len(), s.deck.sections.len());
        for (section, ticker) in s.deck.sections.iter().zip(&s.tickers) {
            assert_eq!(section.ticker.is_some(), ticker.is_some());
        }
    }
}
