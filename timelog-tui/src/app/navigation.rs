use super::*;

impl App {
    /// Switch between the text box and the list
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::List,
            Focus::List => Focus::Input,
        };
        if self.focus == Focus::List && self.list_index.is_none() {
            self.list_index = self.last_row_index();
        }
    }

    fn last_row_index(&self) -> Option<usize> {
        self.view().rows.len().checked_sub(1)
    }

    /// Move down in the list (vim-style j or down)
    pub fn select_next(&mut self) {
        let Some(last) = self.last_row_index() else {
            self.list_index = None;
            return;
        };
        self.list_index = Some(match self.list_index {
            Some(i) => (i + 1).min(last),
            None => 0,
        });
    }

    /// Move up in the list (vim-style k or up)
    pub fn select_previous(&mut self) {
        let Some(last) = self.last_row_index() else {
            self.list_index = None;
            return;
        };
        self.list_index = Some(match self.list_index {
            Some(i) => i.saturating_sub(1).min(last),
            None => last,
        });
    }

    /// Keep the cursor on an existing row after the list changed size.
    pub fn clamp_list_index(&mut self) {
        self.list_index = match (self.list_index, self.last_row_index()) {
            (Some(i), Some(last)) => Some(i.min(last)),
            _ => None,
        };
    }
}
