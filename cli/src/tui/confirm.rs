// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::Component;

/// The delete-confirmation prompt. The actual delete only happens on an
/// explicit `y`; anything else cancels back to the detail panel.
pub struct ConfirmDelete;

impl Component<CalendarStore> for ConfirmDelete {
    fn render(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let title = store
            .detail
            .as_deref()
            .and_then(|id| store.content.find(id))
            .map(|e| e.title.clone())
            .unwrap_or_default();

        let lines = vec![
            Line::from(format!("Delete \"{title}\"?")),
            Line::from(""),
            Line::from(vec![
                Span::from("y").bold().fg(Color::Red),
                Span::from(" delete    "),
                Span::from("n").bold().fg(Color::Blue),
                Span::from(" cancel"),
            ]),
        ];
        Paragraph::new(lines).centered().render(area, buf);
    }
}
