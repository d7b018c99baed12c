// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use postcal_core::{DayCell, MonthGrid, WEEKDAY_LABELS};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::Component;
use crate::tui::theme::platform_fg;
use crate::util::truncate_text;

const TITLE_WIDTH: usize = 15;

/// The month grid: weekday header plus one row per week, each day cell
/// showing up to three entries and a `+N more` indicator.
pub struct MonthView;

impl Component<CalendarStore> for MonthView {
    fn render(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let grid = MonthGrid::build(store.anchor, store.today, store.content.entries());
        let selected = store.selected_id();

        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(grid.weeks.iter().map(|_| Constraint::Fill(1)));
        let rows = Layout::vertical(constraints).split(area);

        let header_cols = Layout::horizontal([Constraint::Fill(1); 7]).split(rows[0]);
        for (label, col) in WEEKDAY_LABELS.iter().zip(header_cols.iter()) {
            Paragraph::new(*label)
                .bold()
                .centered()
                .render(*col, buf);
        }

        for (week, row) in grid.weeks.iter().zip(rows.iter().skip(1)) {
            let cols = Layout::horizontal([Constraint::Fill(1); 7]).split(*row);
            for (cell, col) in week.iter().zip(cols.iter()) {
                render_day(cell, selected.as_deref(), *col, buf);
            }
        }
    }
}

fn render_day(cell: &DayCell, selected: Option<&str>, area: Rect, buf: &mut Buffer) {
    use chrono::Datelike;

    let mut day = Span::from(format!("{:>2}", cell.date.day()));
    day = match (cell.is_today, cell.in_month) {
        (true, _) => day.bold().fg(Color::Yellow),
        (false, true) => day.fg(Color::White),
        (false, false) => day.fg(Color::DarkGray),
    };
    Paragraph::new(Line::from(day)).render(area, buf);

    let mut lines = Vec::with_capacity(cell.visible.len() + 1);
    for entry in &cell.visible {
        let mut span = Span::from(truncate_text(&entry.title, TITLE_WIDTH))
            .fg(platform_fg(entry.platform));
        if selected == Some(entry.id.as_str()) {
            span = span.reversed();
        }
        lines.push(Line::from(span));
    }
    if let Some(more) = cell.more_label() {
        lines.push(Line::from(Span::from(more).fg(Color::DarkGray)));
    }

    if !lines.is_empty() && area.height > 1 {
        let body = Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: area.height - 1,
        };
        Paragraph::new(lines).render(body, buf);
    }
}
