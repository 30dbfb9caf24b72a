use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_text_edit_key(key: KeyEvent, app: &mut App) {
    // Any way out of the editor commits, like a text field losing focus.
    if matches!(
        key.code,
        KeyCode::Enter | KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab
    ) {
        app.commit_text_edit();
        return;
    }

    let Some(edit) = app.text_edit.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Char(c) => edit.input.insert(c),
        KeyCode::Backspace => edit.input.backspace(),
        KeyCode::Left => edit.input.move_left(),
        KeyCode::Right => edit.input.move_right(),
        KeyCode::Home => edit.input.home(),
        KeyCode::End => edit.input.end(),
        _ => {}
    }
}
