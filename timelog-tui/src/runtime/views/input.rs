use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_input_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Tab | KeyCode::BackTab => app.focus_next(),
        KeyCode::Char(c) => app.input.insert(c),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.home(),
        KeyCode::End => app.input.end(),
        KeyCode::Esc => app.input.clear(),
        _ => {}
    }
}
