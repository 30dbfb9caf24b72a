use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::autosave::{self, AutosaveHandle};
use crate::clock::{Clock, SystemClock};
use crate::persist;
use crate::render::{self, ListView};
use crate::state::AppState;
use crate::store::Store;

/// Shared handle to the tracker state, its store and its clock.
///
/// Every operation locks the state, runs to completion and unlocks, so the
/// autosave task only ever sees state between operations.
#[derive(Clone)]
pub struct Tracker {
    state: Arc<Mutex<AppState>>,
    store: Arc<dyn Store>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("state", &self.state)
            .finish()
    }
}

impl Tracker {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn Store>, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::default())),
            store,
            clock,
        }
    }

    fn lock(&self) -> MutexGuard<'_, AppState> {
        // Operations never leave the state half-updated, so a poisoned lock
        // still guards consistent data.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the in-memory state with whatever the store holds.
    pub fn load(&self) {
        let restored = persist::restore(self.store.as_ref());
        tracing::info!(
            saved = restored.saved_items.len(),
            current = restored.current_item.is_some(),
            "Loaded saved data"
        );
        *self.lock() = restored;
    }

    /// Write the current state. The lock is held through the write so a
    /// concurrent `clear_data` cannot be undone by a stale blob.
    pub fn save_now(&self) {
        let state = self.lock();
        let blob = persist::encode(&state);
        persist::persist_blob(&blob, self.store.as_ref());
    }

    pub fn create_item(&self, text: &str) -> Option<String> {
        let now = self.clock.now();
        let id = self.lock().create_item(text, now);
        if let Some(id) = &id {
            tracing::debug!(%id, "Created item");
        }
        id
    }

    pub fn pause(&self) {
        let now = self.clock.now();
        self.lock().pause(now);
    }

    pub fn start(&self) {
        let now = self.clock.now();
        self.lock().start(now);
    }

    pub fn finish(&self) {
        let now = self.clock.now();
        self.lock().finish(now);
    }

    pub fn toggle_selection(&self, id: &str) {
        self.lock().toggle_selection(id);
    }

    pub fn edit_text(&self, id: &str, new_text: &str) -> bool {
        self.lock().edit_text(id, new_text)
    }

    /// Reset all state and discard the stored blob.
    pub fn clear_data(&self) {
        let mut state = self.lock();
        state.clear_all();
        if let Err(e) = self.store.clear() {
            tracing::warn!("Failed to clear saved data: {}", e);
        }
        tracing::info!("Cleared all data");
    }

    pub fn is_running(&self) -> bool {
        self.lock().is_running()
    }

    pub fn has_current_item(&self) -> bool {
        self.lock().current_item.is_some()
    }

    pub fn state(&self) -> AppState {
        self.lock().clone()
    }

    pub fn view(&self) -> ListView {
        render::render_list(&self.lock())
    }

    /// Start saving the state every `interval`.
    pub fn spawn_autosave(&self, interval: Duration) -> AutosaveHandle {
        let tracker = self.clone();
        autosave::spawn(interval, move || tracker.save_now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::model::TimeRange;
    use crate::store::MemoryStore;

    fn tracker() -> (Tracker, MemoryStore, ManualClock) {
        let store = MemoryStore::new();
        let clock = ManualClock::new(0);
        let tracker = Tracker::with_clock(Arc::new(store.clone()), Arc::new(clock.clone()));
        (tracker, store, clock)
    }

    #[test]
    fn write_report_scenario_through_tracker() {
        let (tracker, _, clock) = tracker();
        tracker.create_item("write report");
        clock.set(1000);
        tracker.pause();
        clock.set(3000);
        tracker.start();
        clock.set(4000);
        tracker.finish();

        let state = tracker.state();
        assert_eq!(
            state.saved_items[0].time_ranges,
            vec![
                TimeRange {
                    start: 0,
                    end: Some(1000)
                },
                TimeRange {
                    start: 3000,
                    end: Some(4000)
                },
            ]
        );
        let view = tracker.view();
        assert_eq!(view.rows[0].duration, "2s");
        assert_eq!(view.selected_total, "2s");
    }

    #[test]
    fn save_and_load_through_store() {
        let (tracker, store, clock) = tracker();
        tracker.create_item("task");
        clock.advance(5000);
        tracker.pause();
        tracker.save_now();

        let other = Tracker::with_clock(Arc::new(store), Arc::new(clock));
        other.load();
        let state = other.state();
        assert_eq!(state.current_item, tracker.state().current_item);
        assert!(state.selected_ids.is_empty());
    }

    #[test]
    fn clear_data_empties_state_and_store() {
        let (tracker, store, _) = tracker();
        tracker.create_item("task");
        tracker.save_now();
        assert!(store.load().unwrap().is_some());

        tracker.clear_data();
        assert_eq!(tracker.state(), AppState::default());
        assert_eq!(store.load().unwrap(), None);
    }

    /// Records whether the tracker state was locked while a write happened.
    #[derive(Default)]
    struct LockCheckStore {
        state: Mutex<Option<Arc<Mutex<AppState>>>>,
        writes: Mutex<Vec<bool>>,
    }

    impl Store for LockCheckStore {
        fn save(&self, _blob: &str) -> Result<(), crate::StoreError> {
            let guard = self.state.lock().unwrap();
            let locked = guard.as_ref().is_some_and(|s| s.try_lock().is_err());
            self.writes.lock().unwrap().push(locked);
            Ok(())
        }

        fn load(&self) -> Result<Option<String>, crate::StoreError> {
            Ok(None)
        }

        fn clear(&self) -> Result<(), crate::StoreError> {
            Ok(())
        }
    }

    #[test]
    fn save_holds_state_lock_through_write() {
        let store = Arc::new(LockCheckStore::default());
        let tracker = Tracker::with_clock(store.clone(), Arc::new(ManualClock::new(0)));
        *store.state.lock().unwrap() = Some(tracker.state.clone());

        tracker.create_item("task");
        tracker.save_now();
        assert_eq!(*store.writes.lock().unwrap(), vec![true]);
    }

    #[test]
    fn save_after_clear_writes_empty_snapshot() {
        let (tracker, store, _) = tracker();
        tracker.create_item("task");
        tracker.save_now();
        tracker.clear_data();
        tracker.save_now();

        let blob = store.load().unwrap().unwrap();
        assert_eq!(persist::decode(&blob).unwrap().current, None);
    }

    #[test]
    fn has_current_item_follows_finish() {
        let (tracker, _, _) = tracker();
        assert!(!tracker.has_current_item());
        tracker.create_item("task");
        assert!(tracker.has_current_item());
        tracker.finish();
        assert!(!tracker.has_current_item());
    }

    #[test]
    fn load_with_nothing_stored_keeps_empty_state() {
        let (tracker, _, _) = tracker();
        tracker.load();
        assert_eq!(tracker.state(), AppState::default());
    }

    #[tokio::test(start_paused = true)]
    async fn autosave_writes_current_state() {
        let (tracker, store, _) = tracker();
        let handle = tracker.spawn_autosave(Duration::from_millis(1000));
        tracker.create_item("task");

        tokio::time::sleep(Duration::from_millis(1500)).await;
        let blob = store.load().unwrap().expect("autosave should have written");
        assert!(blob.contains("\"task\""));

        tracker.edit_text(&tracker.state().current_item.unwrap().id, "renamed");
        handle.stop().await;
        assert!(store.load().unwrap().unwrap().contains("\"renamed\""));
    }
}
