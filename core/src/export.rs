// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;

use crate::datetime::{date_key, format_display, parse_date_key};
use crate::entry::ContentEntry;

const CSV_HEADER: &str = "Title,Date,Time,Platform,Type,Description";

/// Serializes the collection as CSV: a fixed header row, then one row per
/// entry in collection order. Every field is double-quote wrapped, with
/// embedded quotes doubled. Platform and type render as display names and
/// the date in display format (`Jan 5, 2025`).
pub fn csv_string(entries: &[ContentEntry]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for entry in entries {
        let date = parse_date_key(&entry.date)
            .map(format_display)
            .unwrap_or_else(|| entry.date.clone());
        let fields = [
            entry.title.as_str(),
            date.as_str(),
            entry.time.as_str(),
            entry.platform.display_name(),
            entry.kind.display_name(),
            entry.description.as_deref().unwrap_or(""),
        ];
        let row: Vec<_> = fields.iter().map(|f| quote(f)).collect();
        csv.push_str(&row.join(","));
        csv.push('\n');
    }
    csv
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// The export file name carries the current date-key.
pub fn export_path(dir: &Path, today: NaiveDate) -> PathBuf {
    dir.join(format!("social-media-calendar-{}.csv", date_key(today)))
}

/// Writes the CSV export into `dir`, returning the written path.
///
/// An empty collection produces no file and returns `None`; the caller is
/// expected to surface a notice to the user.
pub fn export_csv(
    entries: &[ContentEntry],
    dir: &Path,
    today: NaiveDate,
) -> Result<Option<PathBuf>, Box<dyn Error>> {
    if entries.is_empty() {
        return Ok(None);
    }

    fs::create_dir_all(dir)?;
    let path = export_path(dir, today);
    fs::write(&path, csv_string(entries))?;
    tracing::debug!(path = %path.display(), count = entries.len(), "exported csv");
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::entry::{ContentType, Platform};

    use super::*;

    fn launch_entry() -> ContentEntry {
        ContentEntry {
            id: "e1".to_string(),
            title: "Launch".to_string(),
            date: "2025-01-05".to_string(),
            time: "09:00".to_string(),
            platform: Platform::Facebook,
            kind: ContentType::Post,
            description: None,
        }
    }

    #[test]
    fn single_entry_renders_display_names_and_date() {
        let csv = csv_string(&[launch_entry()]);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Title,Date,Time,Platform,Type,Description");
        assert_eq!(
            lines[1],
            r#""Launch","Jan 5, 2025","09:00","Facebook","Post","""#
        );
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let mut entry = launch_entry();
        entry.title = r#"Say "hi""#.to_string();
        let csv = csv_string(&[entry]);
        assert!(csv.contains(r#""Say ""hi""","#));
    }

    #[test]
    fn commas_stay_inside_quoted_fields() {
        let mut entry = launch_entry();
        entry.description = Some("first, second".to_string());
        let csv = csv_string(&[entry]);
        assert!(csv.lines().nth(1).unwrap().ends_with(r#""first, second""#));
    }

    #[test]
    fn rows_follow_collection_order() {
        let mut second = launch_entry();
        second.id = "e2".to_string();
        second.title = "Recap".to_string();
        let csv = csv_string(&[launch_entry(), second]);
        let lines: Vec<_> = csv.lines().collect();
        assert!(lines[1].starts_with(r#""Launch""#));
        assert!(lines[2].starts_with(r#""Recap""#));
    }

    #[test]
    fn empty_collection_exports_nothing() {
        let dir = TempDir::new().unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let written = export_csv(&[], dir.path(), today).unwrap();
        assert_eq!(written, None);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn export_writes_dated_file() {
        let dir = TempDir::new().unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let written = export_csv(&[launch_entry()], dir.path(), today)
            .unwrap()
            .unwrap();
        assert_eq!(
            written.file_name().unwrap().to_str().unwrap(),
            "social-media-calendar-2025-01-05.csv"
        );
        let content = fs::read_to_string(written).unwrap();
        assert!(content.starts_with("Title,Date,Time,"));
    }
}
