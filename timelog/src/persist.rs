//! Encoding of [`AppState`] to and from the stored blob.
//!
//! Nothing here fails loudly: unreadable or malformed data restores to an
//! empty state and failed writes are logged and dropped.

use crate::model::Snapshot;
use crate::state::AppState;
use crate::store::Store;

pub fn encode(state: &AppState) -> String {
    // Plain data with string keys; serialization cannot fail.
    serde_json::to_string(&state.snapshot()).unwrap_or_default()
}

/// Parse a blob. Anything that is not a valid snapshot yields `None`.
pub fn decode(blob: &str) -> Option<Snapshot> {
    match serde_json::from_str::<Option<Snapshot>>(blob) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::warn!("Ignoring malformed saved data: {}", e);
            None
        }
    }
}

pub fn restore(store: &dyn Store) -> AppState {
    match store.load() {
        Ok(Some(blob)) => decode(&blob)
            .map(AppState::from_snapshot)
            .unwrap_or_default(),
        Ok(None) => AppState::default(),
        Err(e) => {
            tracing::warn!("Could not load saved data: {}", e);
            AppState::default()
        }
    }
}

/// Write `blob` to the store, logging instead of returning failures.
pub fn persist_blob(blob: &str, store: &dyn Store) {
    if let Err(e) = store.save(blob) {
        tracing::warn!("Failed to save data: {}", e);
    }
}

pub fn persist(state: &AppState, store: &dyn Store) {
    persist_blob(&encode(state), store);
}
