use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;

/// One contiguous interval of active tracking. `end` is `None` while ongoing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimeRange {
    pub start: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Timestamp>,
}

impl TimeRange {
    pub fn open(start: Timestamp) -> Self {
        Self { start, end: None }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Length of a closed range in milliseconds. Open ranges count as zero.
    pub fn elapsed_ms(&self) -> u64 {
        match self.end {
            Some(end) => end.saturating_sub(self.start).max(0) as u64,
            None => 0,
        }
    }
}

/// A tracked task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub text: String,
    pub time_ranges: Vec<TimeRange>,
}

impl Item {
    /// New item with a fresh id and a single open range starting at `now`.
    pub fn new(text: impl Into<String>, now: Timestamp) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            time_ranges: vec![TimeRange::open(now)],
        }
    }

    pub fn last_range(&self) -> Option<&TimeRange> {
        self.time_ranges.last()
    }

    pub fn last_range_mut(&mut self) -> Option<&mut TimeRange> {
        self.time_ranges.last_mut()
    }

    /// Close the last range if it is still open.
    pub(crate) fn close_open_range(&mut self, now: Timestamp) {
        if let Some(range) = self.last_range_mut() {
            if range.end.is_none() {
                range.end = Some(now);
            }
        }
    }
}

/// The persisted form of the state. Selection is intentionally absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Snapshot {
    #[serde(default)]
    pub saved: Vec<Item>,
    #[serde(default)]
    pub current: Option<Item>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_with_camel_case_ranges_and_omits_open_end() {
        let item = Item {
            id: "a".to_string(),
            text: "write report".to_string(),
            time_ranges: vec![
                TimeRange {
                    start: 0,
                    end: Some(1000),
                },
                TimeRange::open(3000),
            ],
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "a",
                "text": "write report",
                "timeRanges": [{ "start": 0, "end": 1000 }, { "start": 3000 }],
            })
        );
    }

    #[test]
    fn snapshot_accepts_null_current() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"saved":[],"current":null}"#).unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn new_items_get_distinct_ids() {
        let a = Item::new("a", 0);
        let b = Item::new("b", 0);
        assert_ne!(a.id, b.id);
        assert!(a.last_range().unwrap().is_open());
    }

    #[test]
    fn backwards_range_counts_as_zero() {
        let range = TimeRange {
            start: 5000,
            end: Some(1000),
        };
        assert_eq!(range.elapsed_ms(), 0);
    }
}
