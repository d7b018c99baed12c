// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime};

/// NOTE: Used as the storage and cell-matching key, so it must be stable
/// across runs and round-trip through [`parse_date_key`].
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Formats a date as a date-key (`YYYY-MM-DD`, zero-padded).
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parses a date-key back into a date. Inverse of [`date_key`].
pub fn parse_date_key(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_KEY_FORMAT).ok()
}

/// Parses a `HH:MM` time of day.
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, TIME_FORMAT).ok()
}

/// Human-facing date, e.g. `Jan 5, 2025`.
pub fn format_display(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        date.format("%b"),
        date.day(),
        date.year()
    )
}

/// The Sunday on or before the given date. Week start is locale-fixed to
/// Sunday; applying this twice yields the same date.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_sunday();
    date - Days::new(back.into())
}

/// All dates of the displayed month grid, Sunday-started: trailing days of
/// the previous month, the whole target month, then leading days of the
/// next month until the final week is complete. Length is always a
/// multiple of 7.
pub fn month_grid(year: i32, month: u32) -> Vec<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_else(|| panic!("invalid year-month: {year}-{month}"));
    let last = first + Months::new(1) - Days::new(1);

    let start = week_start(first);
    let end = last + Days::new((6 - last.weekday().num_days_from_sunday()).into());

    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Moves a date by whole months, clamping the day of month to the target
/// month's length (Jan 31 - 1 month = Feb 28/29).
pub fn add_months(date: NaiveDate, delta: i32) -> NaiveDate {
    if delta >= 0 {
        date + Months::new(delta as u32)
    } else {
        date - Months::new(delta.unsigned_abs())
    }
}

/// A fixed time-of-day band used to bucket entries in the week view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlot {
    /// [06:00, 12:00)
    Morning,

    /// [12:00, 17:00)
    Afternoon,

    /// [17:00, 21:00)
    Evening,

    /// [21:00, 24:00) and [00:00, 06:00)
    Night,
}

impl TimeSlot {
    /// All slots in display order, top to bottom.
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::Morning,
        TimeSlot::Afternoon,
        TimeSlot::Evening,
        TimeSlot::Night,
    ];

    /// Row label in the week view.
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
            TimeSlot::Evening => "Evening",
            TimeSlot::Night => "Night",
        }
    }

    /// Whether an hour of day falls inside this band.
    pub fn contains_hour(&self, hour: u32) -> bool {
        match self {
            TimeSlot::Morning => (6..12).contains(&hour),
            TimeSlot::Afternoon => (12..17).contains(&hour),
            TimeSlot::Evening => (17..21).contains(&hour),
            TimeSlot::Night => hour >= 21 || hour < 6,
        }
    }

    /// The slot a `HH:MM` string falls into, if it parses.
    pub fn of_time_str(time: &str) -> Option<TimeSlot> {
        use chrono::Timelike;
        let hour = parse_time(time)?.hour();
        Self::ALL.into_iter().find(|s| s.contains_hour(hour))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn date_key_round_trips() {
        let date = d(2025, 1, 5);
        assert_eq!(date_key(date), "2025-01-05");
        assert_eq!(parse_date_key(&date_key(date)), Some(date));
    }

    #[test]
    fn display_format_drops_zero_padding() {
        assert_eq!(format_display(d(2025, 1, 5)), "Jan 5, 2025");
        assert_eq!(format_display(d(2025, 12, 31)), "Dec 31, 2025");
    }

    #[test]
    fn week_start_is_the_previous_sunday() {
        // 2025-01-05 is a Sunday
        assert_eq!(week_start(d(2025, 1, 5)), d(2025, 1, 5));
        assert_eq!(week_start(d(2025, 1, 8)), d(2025, 1, 5));
        assert_eq!(week_start(d(2025, 1, 11)), d(2025, 1, 5));
    }

    #[test]
    fn week_start_is_idempotent() {
        for offset in 0..14 {
            let date = d(2025, 3, 1) + Days::new(offset);
            assert_eq!(week_start(week_start(date)), week_start(date));
        }
    }

    #[test]
    fn month_grid_is_whole_weeks() {
        for (year, month) in [(2025, 1), (2025, 2), (2025, 6), (2024, 2), (2026, 8)] {
            let grid = month_grid(year, month);
            assert_eq!(grid.len() % 7, 0, "{year}-{month}");
            assert_eq!(grid[0].weekday(), chrono::Weekday::Sun);
        }
    }

    #[test]
    fn month_grid_contains_the_month_contiguously() {
        let grid = month_grid(2025, 6);
        let first = grid.iter().position(|x| *x == d(2025, 6, 1)).unwrap();
        let last = grid.iter().position(|x| *x == d(2025, 6, 30)).unwrap();
        assert_eq!(last - first, 29);
        for (i, date) in grid[first..=last].iter().enumerate() {
            assert_eq!(*date, d(2025, 6, 1 + i as u32));
        }
    }

    #[test]
    fn month_grid_pads_with_adjacent_months() {
        // June 2025 starts on a Sunday and ends on a Monday
        let grid = month_grid(2025, 6);
        assert_eq!(grid[0], d(2025, 6, 1));
        assert_eq!(*grid.last().unwrap(), d(2025, 7, 5));

        // August 2025 starts on a Friday
        let grid = month_grid(2025, 8);
        assert_eq!(grid[0], d(2025, 7, 27));
        assert_eq!(*grid.last().unwrap(), d(2025, 9, 6));
    }

    #[test]
    fn add_months_clamps_day_of_month() {
        assert_eq!(add_months(d(2025, 1, 31), 1), d(2025, 2, 28));
        assert_eq!(add_months(d(2024, 1, 31), 1), d(2024, 2, 29));
        assert_eq!(add_months(d(2025, 3, 31), -1), d(2025, 2, 28));
        assert_eq!(add_months(d(2025, 5, 15), 2), d(2025, 7, 15));
    }

    #[test]
    fn slot_band_boundaries() {
        assert_eq!(TimeSlot::of_time_str("06:00"), Some(TimeSlot::Morning));
        assert_eq!(TimeSlot::of_time_str("11:59"), Some(TimeSlot::Morning));
        assert_eq!(TimeSlot::of_time_str("12:00"), Some(TimeSlot::Afternoon));
        assert_eq!(TimeSlot::of_time_str("16:59"), Some(TimeSlot::Afternoon));
        assert_eq!(TimeSlot::of_time_str("17:00"), Some(TimeSlot::Evening));
        assert_eq!(TimeSlot::of_time_str("20:59"), Some(TimeSlot::Evening));
        assert_eq!(TimeSlot::of_time_str("21:00"), Some(TimeSlot::Night));
        assert_eq!(TimeSlot::of_time_str("23:59"), Some(TimeSlot::Night));
        assert_eq!(TimeSlot::of_time_str("00:00"), Some(TimeSlot::Night));
        assert_eq!(TimeSlot::of_time_str("05:59"), Some(TimeSlot::Night));
        assert_eq!(TimeSlot::of_time_str("not a time"), None);
    }
}
