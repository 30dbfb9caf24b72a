use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_list_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Char(' ') => app.toggle_selected_row(),
        KeyCode::Enter => app.begin_text_edit(),
        KeyCode::Tab | KeyCode::BackTab => app.focus_next(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}
