//! Text rendering of the week table and the status line.
//!
//! Produces plain text and serde-friendly rows; markup belongs to whatever
//! host displays them.

use serde::Serialize;

use crate::hours::{Interval, StatusResult, WeeklySchedule};
use crate::storage::MessagesConfig;

/// One row of the opening-hours table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub day_week: u8,
    pub label: String,
    pub hours: Vec<Interval>,
}

impl TableRow {
    pub fn is_closed(&self) -> bool {
        self.hours.is_empty()
    }
}

/// Rows in canonical week order; days without valid intervals have no hours.
pub fn table_rows(schedule: &WeeklySchedule) -> Vec<TableRow> {
    schedule
        .days()
        .iter()
        .map(|d| TableRow {
            day_week: d.day_week,
            label: d.label.clone(),
            hours: d.intervals.clone(),
        })
        .collect()
}

/// Render rows as aligned text, one day per line.
///
/// ```text
/// Monday    08:00-19:00
/// Saturday  08:00-13:00, 15:00-19:00
/// Sunday    closed
/// ```
pub fn render_table(rows: &[TableRow], messages: &MessagesConfig) -> String {
    let width = rows
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in rows {
        let hours = if row.is_closed() {
            messages.closed_day.clone()
        } else {
            row.hours
                .iter()
                .map(|i| format!("{}-{}", i.start, i.end))
                .collect::<Vec<_>>()
                .join(", ")
        };
        out.push_str(&format!("{:<width$}  {}\n", row.label, hours, width = width));
    }
    out
}

/// Status line from the configured templates.
///
/// `{end}` is replaced in the open template; `{day}` and `{start}` in the
/// closed one. With no opening anywhere the `closed_indefinitely` text is used.
pub fn status_message(status: &StatusResult, messages: &MessagesConfig) -> String {
    if let Some(end) = status.closes_at_label() {
        return messages.open.replace("{end}", end);
    }
    match &status.next_opening {
        Some(next) => messages
            .closed
            .replace("{day}", &next.day_label)
            .replace("{start}", next.start.label()),
        None => messages.closed_indefinitely.clone(),
    }
}
