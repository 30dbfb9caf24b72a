//! Core of the timelog time tracker.
//!
//! The crate is UI independent: [`AppState`] holds the items and their time
//! ranges, [`render::render_list`] projects that state into a [`ListView`],
//! and a [`Store`] persists it. [`Tracker`] ties the three together behind a
//! clock and owns the autosave task.

pub mod autosave;
pub mod clock;
pub mod duration;
pub mod error;
pub mod model;
pub mod persist;
pub mod render;
pub mod state;
pub mod store;
pub mod tracker;

pub use autosave::AutosaveHandle;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::StoreError;
pub use model::{Item, Snapshot, TimeRange, Timestamp};
pub use render::{ListView, RowView, TrackerStatus};
pub use state::AppState;
pub use store::{FileStore, MemoryStore, Store};
pub use tracker::Tracker;
