use crate::app::App;

use super::action_queue::Action;

pub(super) fn run_action(action: Action, app: &mut App) {
    match action {
        Action::ClearData => {
            app.tracker.clear_data();
            app.text_edit = None;
            app.clamp_list_index();
            app.set_status("All data cleared");
        }
        Action::SaveNow => {
            app.tracker.save_now();
            app.set_status("Saved");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_app;
    use crate::app::TextInput;

    #[test]
    fn clear_data_resets_list_and_cursor() {
        let (mut app, _) = test_app();
        app.input = TextInput::from_str("task");
        app.submit_input();
        app.list_index = Some(0);

        run_action(Action::ClearData, &mut app);

        assert!(app.view().rows.is_empty());
        assert_eq!(app.list_index, None);
        assert_eq!(app.status_message.as_deref(), Some("All data cleared"));
    }
}
