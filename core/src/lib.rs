// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

mod config;
mod datetime;
mod entry;
mod export;
mod store;
mod view;

pub use crate::config::{APP_NAME, Config};
pub use crate::datetime::{
    DATE_KEY_FORMAT, TIME_FORMAT, TimeSlot, add_months, date_key, format_display, month_grid,
    parse_date_key, parse_time, week_start,
};
pub use crate::entry::{ContentEntry, ContentType, EntryDraft, Platform, new_entry_id};
pub use crate::export::{csv_string, export_csv, export_path};
pub use crate::store::ContentStore;
pub use crate::view::{
    DayCell, MAX_DAY_ITEMS, MonthGrid, SlotCell, SlotRow, ViewMode, WEEKDAY_LABELS, WeekDay,
    WeekGrid, period_label,
};
