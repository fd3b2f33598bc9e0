// Event handling and main UI loop

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::access::{AccessRequest, Waitlist};
use crate::config::Config;
use crate::deck::Deck;
use crate::ui::{
    AccessModal, Header, MenuOverlay, SectionView,
    components::{Footer, format_uptime},
    state::{AccessPhase, AppState, SUBMITTED_DISMISS},
};
use ratatui::layout::{Constraint, Direction, Layout};

mod access;
mod showcase;

// Event types sent from dedicated threads to the main loop
enum UiEvent {
    Input(Event),                                  // Keyboard or other terminal events
    Tick,                                          // Periodic update for animation and rendering
    AccessComplete(Result<AccessRequest, String>), // Simulated submission finished
}

/// Spawn a dedicated thread for event polling.
fn spawn_event_thread(tx: Sender<UiEvent>) {
    let tick_rate = Duration::from_millis(16); // ~60 FPS

    thread::spawn(move || {
        let mut last_tick = Instant::now();
        loop {
            // Calculate timeout until next tick
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            // Poll for events with adaptive timeout
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(evt) = event::read() {
                    if tx.send(UiEvent::Input(evt)).is_err() {
                        break; // Main thread dropped the receiver
                    }
                }
            }

            // Send tick if enough time elapsed
            if last_tick.elapsed() >= tick_rate {
                if tx.send(UiEvent::Tick).is_err() {
                    break; // Main thread dropped the receiver
                }
                last_tick = Instant::now();
            }
        }
    });
}

/// Run the simulated submission off the UI thread and report back over the
/// event channel.
fn spawn_submit_thread(
    email: String,
    delay: Duration,
    waitlist_path: Option<std::path::PathBuf>,
    tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        // Stand-in for the real access API
        thread::sleep(delay);

        let request = AccessRequest::new(email);
        let result = match waitlist_path {
            Some(path) => Waitlist::at(path)
                .append(&request)
                .map(|_| request)
                .map_err(|e| format!("{:#}", e)),
            // Nowhere to record; accept the request anyway
            None => Ok(request),
        };

        let _ = tx.send(UiEvent::AccessComplete(result));
    });
}

pub fn run_ui(deck: Deck) -> anyhow::Result<()> {
    run_ui_with_options(deck, None, &Config::default())
}

pub fn run_ui_with_options(
    deck: Deck,
    autoplay: Option<bool>,
    config: &Config,
) -> anyhow::Result<()> {
    // Build state before touching the terminal so early failures leave the
    // shell intact
    let now = Instant::now();
    let mut app_state = AppState::new(deck, config, now)?;

    match Waitlist::default_location() {
        Ok(waitlist) => app_state.waitlist_path = Some(waitlist.path().to_path_buf()),
        Err(e) => tracing::warn!("waitlist unavailable: {:#}", e),
    }

    // Determine whether to animate on launch (CLI flag > config > default)
    if autoplay.unwrap_or(config.startup.autoplay) {
        app_state.boot.activate(now);
    }

    // Setup terminal with alternate screen (full terminal)
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Wire up UI event channel (shared with submission workers)
    let (event_tx, event_rx) = mpsc::channel();
    spawn_event_thread(event_tx.clone());

    // Main loop
    let result = run_app(&mut terminal, &mut app_state, event_rx, event_tx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map_err(Into::into)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    event_rx: Receiver<UiEvent>,
    event_tx: Sender<UiEvent>,
) -> io::Result<()> {
    loop {
        // Collect all pending events so we can coalesce tick bursts and keep
        // inputs snappy
        let mut pending_ticks: u64 = 0;
        let mut pending_inputs: Vec<Event> = Vec::new();
        let mut completions: Vec<Result<AccessRequest, String>> = Vec::new();

        // Always block for at least one event, then drain the queue
        match event_rx.recv() {
            Ok(evt) => match evt {
                UiEvent::Tick => pending_ticks += 1,
                UiEvent::Input(ev) => pending_inputs.push(ev),
                UiEvent::AccessComplete(result) => completions.push(result),
            },
            Err(_) => {
                // Channel closed, exit
                return Ok(());
            }
        }

        while let Ok(evt) = event_rx.try_recv() {
            match evt {
                UiEvent::Tick => pending_ticks += 1,
                UiEvent::Input(ev) => pending_inputs.push(ev),
                UiEvent::AccessComplete(result) => completions.push(result),
            }
        }

        // Process input events first so user commands are never stuck behind
        // a tick backlog
        for input in pending_inputs {
            if let Event::Key(key) = input {
                if handle_key(key, state, &event_tx) {
                    return Ok(());
                }
            }
        }

        for result in completions {
            apply_access_result(state, result);
        }

        if pending_ticks > 0 {
            let now = Instant::now();

            if state.boot.poll(now) {
                tracing::trace!(cursor = ?state.boot.cursor(), "boot sequence advanced");
            }

            for ticker in state.tickers.iter_mut().flatten() {
                ticker.poll(now);
            }

            // The thank-you phase dismisses itself
            let dismiss = matches!(
                state.access_modal.as_ref().map(|m| m.phase),
                Some(AccessPhase::Submitted { since })
                    if now.duration_since(since) >= SUBMITTED_DISMISS
            );
            if dismiss {
                state.access_modal = None;
            }
        }

        // Render after processing events
        terminal.draw(|frame| {
            state.viewport = frame.area();

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2), // Header
                    Constraint::Min(0),    // Section body
                    Constraint::Length(1), // Footer
                ])
                .split(frame.area());

            Header::render(frame, chunks[0], state);
            SectionView::render(frame, chunks[1], state);

            let uptime = format_uptime(state.start_time.elapsed().as_secs());
            frame.render_widget(
                Footer::showcase(&state.app_version, uptime, state.boot.is_active()),
                chunks[2],
            );

            // Overlays render on top
            if let Some(menu) = state.menu.as_mut() {
                MenuOverlay::render(frame, &state.deck, menu);
            }
            if let Some(modal) = &state.access_modal {
                AccessModal::render(frame, modal);
            }
        })?;
    }
}

fn should_quit(key: &KeyEvent) -> bool {
    // Quit on 'q' or Ctrl+C
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn handle_key(key: KeyEvent, state: &mut AppState, tx: &Sender<UiEvent>) -> bool {
    // The access modal captures all input while open (typing 'q' into the
    // email field must not quit)
    if state.access_modal.is_some() {
        access::handle_access_key(key, state, tx);
        return false;
    }

    if state.menu.is_some() {
        showcase::handle_menu_key(key, state);
        return false;
    }

    if should_quit(&key) {
        return true;
    }

    showcase::handle_showcase_key(key, state);
    false
}

fn apply_access_result(state: &mut AppState, result: Result<AccessRequest, String>) {
    let Some(modal) = state.access_modal.as_mut() else {
        // Dismissed while the submission was in flight
        return;
    };

    if !matches!(modal.phase, AccessPhase::Submitting { .. }) {
        return;
    }

    match result {
        Ok(request) => {
            tracing::debug!(id = %request.id, "access request accepted");
            // Clear the form so a reopened modal starts fresh
            *modal = crate::ui::state::AccessModalState::new();
            modal.phase = AccessPhase::Submitted {
                since: Instant::now(),
            };
        }
        Err(err) => {
            tracing::warn!("access request failed: {}", err);
            modal.phase = AccessPhase::Editing;
            modal.error = Some("Something went wrong. Please try again.".to_string());
        }
    }
}
