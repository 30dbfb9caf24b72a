use timelog::{ListView, Tracker};

mod navigation;
mod state;
pub use state::{Focus, TextEdit, TextInput};

pub struct App {
    pub running: bool,
    pub tracker: Tracker,
    pub focus: Focus,
    pub status_message: Option<String>,

    // New-task text box
    pub input: TextInput,

    // List navigation; index into the rendered rows
    pub list_index: Option<usize>,
    pub text_edit: Option<TextEdit>,

    // Clear-data confirmation dialog
    pub confirm_clear: bool,

    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new(tracker: Tracker) -> Self {
        Self {
            running: true,
            tracker,
            focus: Focus::Input,
            status_message: None,
            input: TextInput::new(),
            list_index: None,
            text_edit: None,
            confirm_clear: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.commit_text_edit();
        self.running = false;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn view(&self) -> ListView {
        self.tracker.view()
    }

    /// Create an item from the text box. Blank input is left alone.
    pub fn submit_input(&mut self) {
        if self.input.value.trim().is_empty() {
            return;
        }
        let raw = self.input.take();
        let text = raw.trim();
        if self.tracker.create_item(text).is_some() {
            self.set_status(format!("Tracking \"{}\"", text));
        }
    }

    pub fn pause(&mut self) {
        if !self.tracker.is_running() {
            return;
        }
        self.tracker.pause();
        self.set_status("Paused");
    }

    pub fn resume(&mut self) {
        if !self.tracker.has_current_item() {
            self.set_status("Nothing to resume");
            return;
        }
        self.tracker.start();
        self.set_status("Resumed");
    }

    pub fn finish(&mut self) {
        if !self.tracker.has_current_item() {
            return;
        }
        self.tracker.finish();
        self.set_status("Task finished");
    }

    fn selected_row_id(&self) -> Option<String> {
        let index = self.list_index?;
        self.view().row(index).map(|row| row.id.clone())
    }

    pub fn toggle_selected_row(&mut self) {
        if let Some(id) = self.selected_row_id() {
            self.tracker.toggle_selection(&id);
        }
    }

    /// Start editing the text of the row under the cursor.
    pub fn begin_text_edit(&mut self) {
        let Some(index) = self.list_index else {
            return;
        };
        if let Some(row) = self.view().row(index) {
            self.text_edit = Some(TextEdit {
                item_id: row.id.clone(),
                input: TextInput::from_str(&row.text),
            });
        }
    }

    pub fn is_editing_text(&self) -> bool {
        self.text_edit.is_some()
    }

    /// Leaving the editor always keeps what was typed.
    pub fn commit_text_edit(&mut self) {
        if let Some(edit) = self.text_edit.take() {
            self.tracker.edit_text(&edit.item_id, &edit.input.value);
        }
    }

    pub fn request_clear(&mut self) {
        self.commit_text_edit();
        self.confirm_clear = true;
    }

    pub fn cancel_clear(&mut self) {
        self.confirm_clear = false;
    }
}
