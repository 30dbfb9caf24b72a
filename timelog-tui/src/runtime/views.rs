use crate::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod confirm_clear;
mod input;
mod list;
mod text_edit;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if app.confirm_clear {
        confirm_clear::handle_confirm_clear_key(key, app, action_tx);
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && handle_control_key(key.code, app, action_tx)
    {
        return;
    }

    if app.is_editing_text() {
        text_edit::handle_text_edit_key(key, app);
        return;
    }

    match app.focus {
        Focus::Input => input::handle_input_key(key, app),
        Focus::List => list::handle_list_key(key, app),
    }
}

/// Timer controls, available from every focus. Returns whether the key was
/// consumed.
fn handle_control_key(code: KeyCode, app: &mut App, action_tx: &ActionTx) -> bool {
    match code {
        KeyCode::Char('c') => app.quit(),
        KeyCode::Char('p') => app.pause(),
        KeyCode::Char('s') => app.resume(),
        KeyCode::Char('f') => app.finish(),
        KeyCode::Char('w') => enqueue_action(action_tx, Action::SaveNow),
        KeyCode::Char('x') => app.request_clear(),
        _ => return false,
    }
    true
}
