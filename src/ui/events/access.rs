use super::*;
use crate::access::is_valid_email;

pub(super) fn handle_access_key(key: KeyEvent, state: &mut AppState, tx: &Sender<UiEvent>) {
    let phase = match state.access_modal.as_ref() {
        Some(modal) => modal.phase,
        None => return,
    };

    match phase {
        AccessPhase::Editing => match key.code {
            KeyCode::Esc => {
                state.access_modal = None;
            }
            KeyCode::Enter => {
                submit(state, tx);
            }
            _ => {
                if let Some(modal) = state.access_modal.as_mut() {
                    if modal.email.input(to_textarea_input(key)) {
                        // Stale validation errors clear as soon as the user
                        // edits the field
                        modal.error = None;
                    }
                }
            }
        },

        // The worker result is ignored if the user bails out early
        AccessPhase::Submitting { .. } => {
            if key.code == KeyCode::Esc {
                state.access_modal = None;
            }
        }

        AccessPhase::Submitted { .. } => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                state.access_modal = None;
            }
        }
    }
}

// The email field only needs single-line editing keys
fn to_textarea_input(key: KeyEvent) -> tui_textarea::Input {
    use tui_textarea::{Input, Key};

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    let key = match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        _ => Key::Null,
    };

    Input {
        key,
        ctrl,
        alt,
        shift,
    }
}

fn submit(state: &mut AppState, tx: &Sender<UiEvent>) {
    let Some(modal) = state.access_modal.as_mut() else {
        return;
    };

    let email = modal.email_text().trim().to_string();

    if !is_valid_email(&email) {
        modal.error = Some("Please enter a valid email address".to_string());
        return;
    }

    modal.error = None;
    modal.phase = AccessPhase::Submitting {
        since: Instant::now(),
    };

    tracing::debug!(%email, "submitting access request");
    spawn_submit_thread(
        email,
        state.submit_delay,
        state.waitlist_path.clone(),
        tx.clone(),
    );
}
