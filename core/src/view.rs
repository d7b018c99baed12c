// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Days, NaiveDate};

use crate::datetime::{TimeSlot, date_key, format_display, month_grid, week_start};
use crate::entry::ContentEntry;

/// Which calendar layout is displayed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Month,
    Week,
}

/// Day-of-week column labels, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// How many entries a month-view day cell shows before collapsing the rest
/// into a `+N more` indicator.
pub const MAX_DAY_ITEMS: usize = 3;

/// The month view: full weeks of day cells covering the anchor's month.
#[derive(Debug)]
pub struct MonthGrid {
    /// Rows of exactly 7 cells, Sunday first.
    pub weeks: Vec<Vec<DayCell>>,
}

/// One day cell of the month grid.
#[derive(Debug)]
pub struct DayCell {
    pub date: NaiveDate,
    pub date_key: String,

    /// False for the leading/trailing days borrowed from adjacent months.
    pub in_month: bool,
    pub is_today: bool,

    /// Matching entries in insertion order, capped at [`MAX_DAY_ITEMS`].
    pub visible: Vec<ContentEntry>,

    /// How many matching entries did not fit under the cap.
    pub overflow: usize,
}

impl MonthGrid {
    /// Builds the grid for the anchor's month. Entries are matched to cells
    /// by exact date-key equality, in insertion order.
    pub fn build(anchor: NaiveDate, today: NaiveDate, entries: &[ContentEntry]) -> Self {
        let weeks = month_grid(anchor.year(), anchor.month())
            .chunks(7)
            .map(|chunk| {
                chunk
                    .iter()
                    .map(|date| DayCell::build(*date, anchor, today, entries))
                    .collect()
            })
            .collect();
        Self { weeks }
    }
}

impl DayCell {
    fn build(date: NaiveDate, anchor: NaiveDate, today: NaiveDate, entries: &[ContentEntry]) -> Self {
        let key = date_key(date);
        let matching: Vec<_> = entries.iter().filter(|e| e.date == key).cloned().collect();
        let overflow = matching.len().saturating_sub(MAX_DAY_ITEMS);
        let mut visible = matching;
        visible.truncate(MAX_DAY_ITEMS);

        Self {
            date,
            date_key: key,
            in_month: date.month() == anchor.month() && date.year() == anchor.year(),
            is_today: date == today,
            visible,
            overflow,
        }
    }

    /// Stable identifier for UI tests, keyed by date.
    pub fn test_id(&self) -> String {
        format!("calendar-day-{}", self.date_key)
    }

    /// Stable identifier of one displayed entry, keyed by entry id.
    pub fn item_test_id(entry: &ContentEntry) -> String {
        format!("content-item-{}", entry.id)
    }

    /// The `+N more` indicator, when entries were collapsed.
    pub fn more_label(&self) -> Option<String> {
        match self.overflow {
            0 => None,
            n => Some(format!("+{n} more")),
        }
    }
}

/// The week view: 7 day columns by 4 time-slot rows.
#[derive(Debug)]
pub struct WeekGrid {
    /// The 7 day columns, starting from the anchor's week-start Sunday.
    pub days: Vec<WeekDay>,

    /// The 4 slot rows, Morning through Night.
    pub rows: Vec<SlotRow>,
}

/// One day column header of the week grid.
#[derive(Debug)]
pub struct WeekDay {
    pub date: NaiveDate,
    pub date_key: String,
    pub label: &'static str,
    pub is_today: bool,
}

/// One time-slot row of the week grid.
#[derive(Debug)]
pub struct SlotRow {
    pub slot: TimeSlot,
    pub slot_index: usize,

    /// One cell per day column, same order as [`WeekGrid::days`].
    pub cells: Vec<SlotCell>,
}

/// One day-by-slot cell. Unlike the month view there is no display cap.
#[derive(Debug)]
pub struct SlotCell {
    pub day_index: usize,
    pub slot_index: usize,
    pub entries: Vec<ContentEntry>,
}

impl WeekGrid {
    /// Builds the grid for the week containing the anchor date. A cell
    /// holds the entries whose date-key matches its column and whose hour
    /// falls in its row's band; entries with an unparseable time match no
    /// cell.
    pub fn build(anchor: NaiveDate, today: NaiveDate, entries: &[ContentEntry]) -> Self {
        let start = week_start(anchor);
        let days: Vec<WeekDay> = (0..7)
            .map(|i| {
                let date = start + Days::new(i);
                WeekDay {
                    date,
                    date_key: date_key(date),
                    label: WEEKDAY_LABELS[i as usize],
                    is_today: date == today,
                }
            })
            .collect();

        let rows = TimeSlot::ALL
            .into_iter()
            .enumerate()
            .map(|(slot_index, slot)| SlotRow {
                slot,
                slot_index,
                cells: days
                    .iter()
                    .enumerate()
                    .map(|(day_index, day)| SlotCell {
                        day_index,
                        slot_index,
                        entries: entries
                            .iter()
                            .filter(|e| {
                                e.date == day.date_key
                                    && TimeSlot::of_time_str(&e.time) == Some(slot)
                            })
                            .cloned()
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Self { days, rows }
    }
}

impl WeekDay {
    /// Stable identifier for UI tests, keyed by column index.
    pub fn test_id(index: usize) -> String {
        format!("week-header-{index}")
    }
}

impl SlotRow {
    /// Stable identifier of the row label, keyed by slot index.
    pub fn test_id(&self) -> String {
        format!("time-slot-{}", self.slot_index)
    }
}

impl SlotCell {
    /// Stable identifier for UI tests, keyed by column and row index.
    pub fn test_id(&self) -> String {
        format!("week-slot-{}-{}", self.day_index, self.slot_index)
    }

    /// Stable identifier of one displayed entry, keyed by entry id.
    pub fn item_test_id(entry: &ContentEntry) -> String {
        format!("week-content-item-{}", entry.id)
    }
}

/// The navigation bar label for the displayed period: the month name and
/// year in month view, the week's date span in week view.
pub fn period_label(view: ViewMode, anchor: NaiveDate) -> String {
    match view {
        ViewMode::Month => format!("{} {}", anchor.format("%B"), anchor.year()),
        ViewMode::Week => {
            let start = week_start(anchor);
            let end = start + Days::new(6);
            format!("{} - {}", format_display(start), format_display(end))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::entry::{ContentType, Platform};

    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn entry(id: &str, date: &str, time: &str) -> ContentEntry {
        ContentEntry {
            id: id.to_string(),
            title: format!("Entry {id}"),
            date: date.to_string(),
            time: time.to_string(),
            platform: Platform::Facebook,
            kind: ContentType::Post,
            description: None,
        }
    }

    #[test]
    fn month_grid_marks_today_and_adjacent_months() {
        let grid = MonthGrid::build(d(2025, 8, 1), d(2025, 8, 15), &[]);
        let cells: Vec<_> = grid.weeks.iter().flatten().collect();

        assert_eq!(cells.len() % 7, 0);
        assert!(!cells[0].in_month, "July 27 leads the grid");
        assert_eq!(cells[0].date, d(2025, 7, 27));

        let today = cells.iter().find(|c| c.is_today).unwrap();
        assert_eq!(today.date, d(2025, 8, 15));
        assert!(today.in_month);
        assert_eq!(cells.iter().filter(|c| c.is_today).count(), 1);
    }

    #[test]
    fn day_cell_caps_at_three_with_overflow_label() {
        let entries: Vec<_> = (0..5)
            .map(|i| entry(&i.to_string(), "2025-08-05", "09:00"))
            .collect();
        let grid = MonthGrid::build(d(2025, 8, 1), d(2025, 8, 15), &entries);

        let cell = grid
            .weeks
            .iter()
            .flatten()
            .find(|c| c.date_key == "2025-08-05")
            .unwrap();
        assert_eq!(cell.visible.len(), 3);
        assert_eq!(cell.overflow, 2);
        assert_eq!(cell.more_label(), Some("+2 more".to_string()));

        // cap keeps insertion order
        let ids: Vec<_> = cell.visible.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["0", "1", "2"]);
    }

    #[test]
    fn day_cell_without_overflow_has_no_more_label() {
        let entries = vec![entry("a", "2025-08-05", "09:00")];
        let grid = MonthGrid::build(d(2025, 8, 1), d(2025, 8, 15), &entries);
        let cell = grid
            .weeks
            .iter()
            .flatten()
            .find(|c| c.date_key == "2025-08-05")
            .unwrap();
        assert_eq!(cell.visible.len(), 1);
        assert_eq!(cell.more_label(), None);
    }

    #[test]
    fn week_grid_buckets_entries_by_day_and_slot() {
        let entries = vec![
            entry("morning", "2025-08-10", "06:00"),
            entry("afternoon", "2025-08-10", "12:00"),
            entry("night-late", "2025-08-12", "23:59"),
            entry("night-early", "2025-08-12", "00:00"),
            entry("other-week", "2025-08-20", "09:00"),
        ];
        // Anchor mid-week; week runs Sun Aug 10 - Sat Aug 16
        let grid = WeekGrid::build(d(2025, 8, 13), d(2025, 8, 13), &entries);

        assert_eq!(grid.days[0].date, d(2025, 8, 10));
        assert_eq!(grid.days.len(), 7);
        assert_eq!(grid.rows.len(), 4);

        let cell = |day: usize, slot: usize| &grid.rows[slot].cells[day];
        let ids = |c: &SlotCell| c.entries.iter().map(|e| e.id.clone()).collect::<Vec<_>>();

        assert_eq!(ids(cell(0, 0)), ["morning"]);
        assert_eq!(ids(cell(0, 1)), ["afternoon"]);
        assert_eq!(ids(cell(2, 3)), ["night-late", "night-early"]);

        let total: usize = grid
            .rows
            .iter()
            .flat_map(|r| &r.cells)
            .map(|c| c.entries.len())
            .sum();
        assert_eq!(total, 4, "entry outside the week is excluded");
    }

    #[test]
    fn week_cells_have_no_display_cap() {
        let entries: Vec<_> = (0..6)
            .map(|i| entry(&i.to_string(), "2025-08-10", "08:00"))
            .collect();
        let grid = WeekGrid::build(d(2025, 8, 10), d(2025, 8, 10), &entries);
        assert_eq!(grid.rows[0].cells[0].entries.len(), 6);
    }

    #[test]
    fn cells_expose_stable_test_ids() {
        let entries = vec![entry("abc", "2025-08-05", "09:00")];
        let grid = MonthGrid::build(d(2025, 8, 1), d(2025, 8, 15), &entries);
        let cell = grid
            .weeks
            .iter()
            .flatten()
            .find(|c| c.date_key == "2025-08-05")
            .unwrap();
        assert_eq!(cell.test_id(), "calendar-day-2025-08-05");
        assert_eq!(DayCell::item_test_id(&cell.visible[0]), "content-item-abc");

        let week = WeekGrid::build(d(2025, 8, 5), d(2025, 8, 5), &entries);
        assert_eq!(week.rows[1].cells[2].test_id(), "week-slot-2-1");
        assert_eq!(week.rows[1].test_id(), "time-slot-1");
        assert_eq!(WeekDay::test_id(0), "week-header-0");
    }

    #[test]
    fn period_label_follows_the_view() {
        assert_eq!(period_label(ViewMode::Month, d(2025, 1, 15)), "January 2025");
        assert_eq!(
            period_label(ViewMode::Week, d(2025, 1, 8)),
            "Jan 5, 2025 - Jan 11, 2025"
        );
    }
}
