use super::*;
use crate::ui::state::{AccessModalState, MenuState};

pub(super) fn handle_showcase_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        // Section navigation
        KeyCode::Right | KeyCode::Tab => state.select_next_section(),
        KeyCode::Left | KeyCode::BackTab => state.select_prev_section(),
        KeyCode::Char(c @ '1'..='9') => {
            state.select_section(c as usize - '1' as usize);
        }

        // Open the access-request modal
        KeyCode::Char('a') | KeyCode::Char('A') => {
            state.access_modal = Some(AccessModalState::new());
        }

        // Open the navigation overlay
        KeyCode::Char('m') | KeyCode::Char('M') => {
            state.menu = Some(MenuState::new(state.selected_section));
        }

        // Toggle the boot sequence; turning it off resets to step 0
        KeyCode::Char('b') | KeyCode::Char('B') => {
            let active = state.boot.is_active();
            state.boot.set_active(!active, Instant::now());
        }

        _ => {}
    }
}

pub(super) fn handle_menu_key(key: KeyEvent, state: &mut AppState) {
    let count = state.section_count();

    match key.code {
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Char('q') => {
            state.menu = None;
        }

        KeyCode::Up => {
            if let Some(menu) = state.menu.as_mut() {
                let selected = menu.list_state.selected().unwrap_or(0);
                if selected > 0 {
                    menu.list_state.select(Some(selected - 1));
                }
            }
        }

        KeyCode::Down => {
            if let Some(menu) = state.menu.as_mut() {
                let selected = menu.list_state.selected().unwrap_or(0);
                if selected + 1 < count {
                    menu.list_state.select(Some(selected + 1));
                }
            }
        }

        KeyCode::Enter => {
            let target = state.menu.as_ref().and_then(|m| m.list_state.selected());
            if let Some(index) = target {
                state.select_section(index);
            }
            state.menu = None;
        }

        _ => {}
    }
}
