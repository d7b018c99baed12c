// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use colored::{Color, Colorize};
use postcal_core::{ContentEntry, Platform, format_display, parse_date_key};
use unicode_width::UnicodeWidthStr;

/// Writes entries as an aligned table: date, time, platform, type, title.
#[derive(Debug, Default)]
pub struct EntryFormatter {
    separator: &'static str,
}

impl EntryFormatter {
    pub fn new() -> Self {
        Self { separator: "  " }
    }

    pub fn write_to(
        &self,
        w: &mut impl io::Write,
        entries: &[ContentEntry],
    ) -> Result<(), Box<dyn Error>> {
        let rows: Vec<[String; 5]> = entries.iter().map(Self::format_row).collect();

        let mut widths = [0usize; 5];
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row.iter()) {
                *w = (*w).max(cell.width());
            }
        }

        for (row, entry) in rows.iter().zip(entries) {
            for (i, (cell, width)) in row.iter().zip(widths).enumerate() {
                let last = i == row.len() - 1;
                let padded = if last {
                    cell.clone() // left-aligned last column needs no padding
                } else {
                    format!("{cell:<width$}")
                };
                let styled = match i {
                    2 => padded.color(platform_color(entry.platform)).to_string(),
                    _ => padded,
                };
                write!(w, "{styled}")?;
                if last {
                    writeln!(w)?;
                } else {
                    write!(w, "{}", self.separator)?;
                }
            }
        }
        Ok(())
    }

    fn format_row(entry: &ContentEntry) -> [String; 5] {
        let date = parse_date_key(&entry.date)
            .map(format_display)
            .unwrap_or_else(|| entry.date.clone());
        [
            date,
            entry.time.clone(),
            entry.platform.display_name().to_string(),
            entry.kind.display_name().to_string(),
            entry.title.clone(),
        ]
    }
}

/// Terminal color closest to the platform's brand color.
pub fn platform_color(platform: Platform) -> Color {
    match hex_rgb(platform.color()) {
        Some((r, g, b)) => Color::TrueColor { r, g, b },
        None => Color::White,
    }
}

fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use postcal_core::ContentType;

    use super::*;

    fn entry(title: &str, platform: Platform) -> ContentEntry {
        ContentEntry {
            id: "x".to_string(),
            title: title.to_string(),
            date: "2025-01-05".to_string(),
            time: "09:00".to_string(),
            platform,
            kind: ContentType::Post,
            description: None,
        }
    }

    #[test]
    fn writes_one_line_per_entry() {
        colored::control::set_override(false);
        let formatter = EntryFormatter::new();
        let entries = vec![
            entry("Launch", Platform::Facebook),
            entry("Recap", Platform::Twitter),
        ];
        let mut out = Vec::new();
        formatter.write_to(&mut out, &entries).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Jan 5, 2025  09:00  Facebook"));
        assert!(lines[0].ends_with("Launch"));
        assert!(lines[1].contains("Twitter"));
    }

    #[test]
    fn brand_colors_parse_to_rgb() {
        assert_eq!(hex_rgb("#1877f2"), Some((0x18, 0x77, 0xf2)));
        assert_eq!(hex_rgb("#zzzzzz"), None);
        for platform in Platform::ALL {
            assert!(hex_rgb(platform.color()).is_some());
        }
    }
}
