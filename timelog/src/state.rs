//! State transitions. Every operation here is a plain mutation of
//! [`AppState`]; the caller supplies the current time.

use std::collections::HashSet;

use crate::model::{Item, Snapshot, TimeRange, Timestamp};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub current_item: Option<Item>,
    pub saved_items: Vec<Item>,
    pub selected_ids: HashSet<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a new task. A task already in progress is closed and
    /// moved to the saved list first.
    ///
    /// Returns the new item's id, or `None` when `text` is blank.
    pub fn create_item(&mut self, text: &str, now: Timestamp) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }

        if let Some(mut previous) = self.current_item.take() {
            // A paused item already has its end time.
            previous.close_open_range(now);
            self.saved_items.push(previous);
        }

        let item = Item::new(text, now);
        let id = item.id.clone();
        self.selected_ids.insert(id.clone());
        self.current_item = Some(item);
        Some(id)
    }

    pub fn pause(&mut self, now: Timestamp) {
        if let Some(item) = self.current_item.as_mut() {
            item.close_open_range(now);
        }
    }

    /// Resume the current task by appending a new range. An open previous
    /// range is left open.
    pub fn start(&mut self, now: Timestamp) {
        if let Some(item) = self.current_item.as_mut() {
            item.time_ranges.push(TimeRange::open(now));
        }
    }

    pub fn finish(&mut self, now: Timestamp) {
        let Some(mut item) = self.current_item.take() else {
            return;
        };
        if let Some(range) = item.last_range_mut() {
            range.end = Some(now);
        }
        self.saved_items.push(item);
    }

    pub fn toggle_selection(&mut self, id: &str) {
        if !self.selected_ids.remove(id) {
            self.selected_ids.insert(id.to_string());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ids.contains(id)
    }

    pub fn clear_all(&mut self) {
        self.current_item = None;
        self.saved_items.clear();
        self.selected_ids.clear();
    }

    /// Overwrite the text of the item with `id`. Returns `false` if no such
    /// item exists.
    pub fn edit_text(&mut self, id: &str, new_text: &str) -> bool {
        match self.find_item_mut(id) {
            Some(item) => {
                item.text = new_text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn find_item(&self, id: &str) -> Option<&Item> {
        self.current_item
            .iter()
            .chain(self.saved_items.iter())
            .find(|item| item.id == id)
    }

    fn find_item_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.current_item
            .iter_mut()
            .chain(self.saved_items.iter_mut())
            .find(|item| item.id == id)
    }

    /// `true` while the current item has an open last range.
    pub fn is_running(&self) -> bool {
        self.current_item
            .as_ref()
            .and_then(Item::last_range)
            .is_some_and(TimeRange::is_open)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            saved: self.saved_items.clone(),
            current: self.current_item.clone(),
        }
    }

    /// Rebuild state from a persisted snapshot. Selection starts empty.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            current_item: snapshot.current,
            saved_items: snapshot.saved,
            selected_ids: HashSet::new(),
        }
    }
}
