// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use postcal_core::WeekGrid;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::Component;
use crate::tui::theme::platform_fg;
use crate::util::truncate_text;

const SLOT_LABEL_WIDTH: u16 = 10;
const TITLE_WIDTH: usize = 12;

/// The week grid: 7 day columns by the 4 fixed time slots, no display cap
/// inside the cells.
pub struct WeekView;

impl Component<CalendarStore> for WeekView {
    fn render(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let grid = WeekGrid::build(store.anchor, store.today, store.content.entries());
        let selected = store.selected_id();

        let mut constraints = vec![Constraint::Length(2)];
        constraints.extend(grid.rows.iter().map(|_| Constraint::Fill(1)));
        let rows = Layout::vertical(constraints).split(area);

        let mut cols = vec![Constraint::Length(SLOT_LABEL_WIDTH)];
        cols.extend([Constraint::Fill(1); 7]);

        // header: day name over day-of-month, today highlighted
        let header_cols = Layout::horizontal(cols.clone()).split(rows[0]);
        for (day, col) in grid.days.iter().zip(header_cols.iter().skip(1)) {
            use chrono::Datelike;
            let mut name = Span::from(day.label);
            let mut date = Span::from(day.date.day().to_string());
            if day.is_today {
                name = name.bold().fg(Color::Yellow);
                date = date.bold().fg(Color::Yellow);
            }
            Paragraph::new(vec![Line::from(name), Line::from(date)])
                .centered()
                .render(*col, buf);
        }

        for (slot_row, row) in grid.rows.iter().zip(rows.iter().skip(1)) {
            let row_cols = Layout::horizontal(cols.clone()).split(*row);
            Paragraph::new(slot_row.slot.label())
                .fg(Color::Gray)
                .render(row_cols[0], buf);

            for (cell, col) in slot_row.cells.iter().zip(row_cols.iter().skip(1)) {
                let lines: Vec<Line> = cell
                    .entries
                    .iter()
                    .map(|entry| {
                        let text = format!(
                            "{} {}",
                            entry.time,
                            truncate_text(&entry.title, TITLE_WIDTH)
                        );
                        let mut span = Span::from(text).fg(platform_fg(entry.platform));
                        if selected.as_deref() == Some(entry.id.as_str()) {
                            span = span.reversed();
                        }
                        Line::from(span)
                    })
                    .collect();
                Paragraph::new(lines).render(*col, buf);
            }
        }
    }
}
