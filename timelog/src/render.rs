//! Pure projection of [`AppState`] into display rows.
//!
//! The projection is rebuilt from scratch on every call; front ends draw the
//! returned [`ListView`] and never patch it.

use time::UtcOffset;

use crate::duration::{compute_duration, format_clock_time_at, format_duration, local_offset};
use crate::model::{Item, TimeRange};
use crate::state::AppState;

pub const HEADER: [&str; 3] = ["Time ranges", "Duration", "Description"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerStatus {
    /// No task in progress.
    Idle,
    Running,
    Paused,
}

impl TrackerStatus {
    pub fn of(state: &AppState) -> Self {
        match &state.current_item {
            None => TrackerStatus::Idle,
            Some(_) if state.is_running() => TrackerStatus::Running,
            Some(_) => TrackerStatus::Paused,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrackerStatus::Idle => "Idle",
            TrackerStatus::Running => "Tracking...",
            TrackerStatus::Paused => "Paused",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: String,
    /// One entry per range: `HH:MM~` or `HH:MM~HH:MM`.
    pub ranges: Vec<String>,
    pub text: String,
    pub duration: String,
    pub selected: bool,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub header: [&'static str; 3],
    /// Saved items in insertion order, then the current item.
    pub rows: Vec<RowView>,
    /// Total of the selected saved items in milliseconds.
    pub selected_total_ms: u64,
    pub selected_total: String,
    pub status: TrackerStatus,
}

fn render_range(range: &TimeRange, offset: UtcOffset) -> String {
    let mut text = format!("{}~", format_clock_time_at(range.start, offset));
    if let Some(end) = range.end {
        text.push_str(&format_clock_time_at(end, offset));
    }
    text
}

pub fn render_item_row(item: &Item, selected: bool, is_current: bool) -> RowView {
    render_item_row_at(item, selected, is_current, local_offset())
}

pub fn render_item_row_at(
    item: &Item,
    selected: bool,
    is_current: bool,
    offset: UtcOffset,
) -> RowView {
    RowView {
        id: item.id.clone(),
        ranges: item
            .time_ranges
            .iter()
            .map(|range| render_range(range, offset))
            .collect(),
        text: item.text.clone(),
        duration: format_duration(compute_duration(item)),
        selected,
        is_current,
    }
}

pub fn render_list(state: &AppState) -> ListView {
    render_list_at(state, local_offset())
}

pub fn render_list_at(state: &AppState, offset: UtcOffset) -> ListView {
    let mut rows: Vec<RowView> = state
        .saved_items
        .iter()
        .map(|item| render_item_row_at(item, state.is_selected(&item.id), false, offset))
        .collect();

    if let Some(current) = &state.current_item {
        rows.push(render_item_row_at(
            current,
            state.is_selected(&current.id),
            true,
            offset,
        ));
    }

    // The current item is still in progress and stays out of the total.
    let selected_total_ms = state
        .saved_items
        .iter()
        .filter(|item| state.is_selected(&item.id))
        .map(compute_duration)
        .sum();

    ListView {
        header: HEADER,
        rows,
        selected_total_ms,
        selected_total: format_duration(selected_total_ms),
        status: TrackerStatus::of(state),
    }
}

impl ListView {
    pub fn row(&self, index: usize) -> Option<&RowView> {
        self.rows.get(index)
    }

    /// Plain-text rendering, one line per row.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 3);
        lines.push(format!("Status: {}", self.status.label()));
        lines.push(format!("  {}", self.header.join(" | ")));
        for row in &self.rows {
            let marker = if row.selected { '*' } else { ' ' };
            lines.push(format!(
                "{} {} | {} | {}",
                marker,
                row.ranges.join(" "),
                row.duration,
                row.text
            ));
        }
        lines.push(format!("  Selected total: {}", self.selected_total));
        lines.join("\n")
    }
}
