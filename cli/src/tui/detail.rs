// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use postcal_core::{format_display, parse_date_key};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::Component;
use crate::tui::theme::platform_fg;

/// Read-only panel for one entry, with edit/delete routed via keys from
/// the app shell. A vanished entry renders as an empty panel and the next
/// action closes it.
pub struct DetailPanel;

impl Component<CalendarStore> for DetailPanel {
    fn render(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let Some(entry) = store.detail.as_deref().and_then(|id| store.content.find(id)) else {
            return;
        };

        let date = parse_date_key(&entry.date)
            .map(format_display)
            .unwrap_or_else(|| entry.date.clone());

        let label = |s: &str| Span::from(s.to_string()).bold().fg(Color::Gray);
        let mut lines = vec![
            Line::from(label("Title")),
            Line::from(entry.title.clone()),
            Line::from(""),
            Line::from(label("Date & Time")),
            Line::from(format!("{} at {}", date, entry.time)),
            Line::from(""),
            Line::from(label("Platform")),
            Line::from(
                Span::from(entry.platform.display_name()).fg(platform_fg(entry.platform)),
            ),
            Line::from(""),
            Line::from(label("Content Type")),
            Line::from(entry.kind.display_name()),
        ];
        if let Some(description) = &entry.description {
            lines.push(Line::from(""));
            lines.push(Line::from(label("Description")));
            lines.push(Line::from(description.clone()));
        }

        Paragraph::new(lines).render(area, buf);
    }
}
