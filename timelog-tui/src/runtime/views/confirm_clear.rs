use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_confirm_clear_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.cancel_clear();
            enqueue_action(action_tx, Action::ClearData);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_clear(),
        _ => {}
    }
}
